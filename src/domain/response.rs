/// Raw outcome of one upstream call.
///
/// A non-2xx response is still a `GatewayResult` with `ok == false`; the body is never
/// interpreted here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayResult {
    pub ok: bool,
    pub http_status: u16,
    pub http_status_text: String,
    pub raw_body: String,
}

/// Fields scraped from an order response body (`TnOptionOrder`, `MoveTnsOrder`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedOrderResponse {
    pub order_id: Option<String>,
    pub processing_status: Option<String>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub phone_numbers: Vec<String>,
}
