use std::error::Error as StdError;
use std::sync::{Arc, Mutex};

use super::{BoxFuture, HttpRequest, HttpResponse, HttpTransport};

#[derive(Debug, Clone)]
pub(crate) struct FakeTransport {
    state: Arc<Mutex<FakeTransportState>>,
}

#[derive(Debug)]
struct FakeTransportState {
    calls: usize,
    last_request: Option<HttpRequest>,
    response: Result<HttpResponse, String>,
}

impl FakeTransport {
    pub(crate) fn new(status: u16, status_text: &str, body: impl Into<String>) -> Self {
        Self::with_response(Ok(HttpResponse {
            status,
            status_text: status_text.to_owned(),
            body: body.into(),
        }))
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self::with_response(Err(message.to_owned()))
    }

    fn with_response(response: Result<HttpResponse, String>) -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeTransportState {
                calls: 0,
                last_request: None,
                response,
            })),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.state.lock().unwrap().calls
    }

    pub(crate) fn last_request(&self) -> Option<HttpRequest> {
        self.state.lock().unwrap().last_request.clone()
    }
}

impl HttpTransport for FakeTransport {
    fn send<'a>(
        &'a self,
        request: HttpRequest,
    ) -> BoxFuture<'a, Result<HttpResponse, Box<dyn StdError + Send + Sync>>> {
        Box::pin(async move {
            let response = {
                let mut state = self.state.lock().unwrap();
                state.calls += 1;
                state.last_request = Some(request);
                state.response.clone()
            };
            response.map_err(|message| message.into())
        })
    }
}
