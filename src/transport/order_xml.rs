//! Best-effort field extraction from Bandwidth order responses.
//!
//! Order endpoints answer with XML such as
//!
//! ```xml
//! <TnOptionOrderResponse>
//!   <TnOptionOrder>
//!     <OrderId>ddbdc72e-dc27-490c-904e-d0c11291b095</OrderId>
//!     <ProcessingStatus>RECEIVED</ProcessingStatus>
//!     ...
//!   </TnOptionOrder>
//! </TnOptionOrderResponse>
//! ```
//!
//! Only a fixed set of fields is looked up, each with its own case-insensitive pattern. There is
//! no document model: nesting, namespaces and unclosed tags are not understood, and a repeated tag
//! is attributed to the nearest closing tag after it.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::ParsedOrderResponse;

struct ListPattern {
    container: Regex,
    item: Regex,
}

impl ListPattern {
    fn compile(container: &str, item: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            container: Regex::new(&format!(r"(?is)<{container}[^>]*>(.*?)</{container}>"))?,
            item: value_pattern(item)?,
        })
    }

    /// Items of the first container, in document order.
    ///
    /// A container without item tags but with text yields that text as the only entry.
    fn extract(&self, text: &str) -> Vec<String> {
        let Some(content) = self.container.captures(text).and_then(|caps| caps.get(1)) else {
            return Vec::new();
        };
        let content = content.as_str();

        let items: Vec<String> = self
            .item
            .captures_iter(content)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_owned())
            .collect();
        if !items.is_empty() {
            return items;
        }

        let flat = content.trim();
        if flat.is_empty() {
            Vec::new()
        } else {
            vec![flat.to_owned()]
        }
    }
}

struct OrderPatterns {
    order_id: Regex,
    processing_status: Regex,
    errors: ListPattern,
    warnings: ListPattern,
    phone_numbers: ListPattern,
}

impl OrderPatterns {
    fn compile() -> Result<Self, regex::Error> {
        Ok(Self {
            order_id: value_pattern("OrderId")?,
            processing_status: value_pattern("ProcessingStatus")?,
            errors: ListPattern::compile("Errors", "Error")?,
            warnings: ListPattern::compile("Warnings", "Warning")?,
            phone_numbers: ListPattern::compile("TelephoneNumbers", "TelephoneNumber")?,
        })
    }
}

static PATTERNS: LazyLock<Option<OrderPatterns>> = LazyLock::new(|| {
    OrderPatterns::compile()
        .inspect_err(|err| {
            tracing::warn!(error = %err, "order response patterns failed to compile")
        })
        .ok()
});

fn value_pattern(tag: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(r"(?i)<{tag}[^>]*>([^<]+)</{tag}>"))
}

fn first_value(pattern: &Regex, text: &str) -> Option<String> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim().to_owned())
}

/// Extract order id, processing status, errors, warnings and telephone numbers from `text`.
///
/// Never fails: fields that cannot be found stay `None` or empty.
pub fn parse_order_response(text: &str) -> ParsedOrderResponse {
    let Some(patterns) = PATTERNS.as_ref() else {
        return ParsedOrderResponse::default();
    };

    ParsedOrderResponse {
        order_id: first_value(&patterns.order_id, text),
        processing_status: first_value(&patterns.processing_status, text),
        errors: patterns.errors.extract(text),
        warnings: patterns.warnings.extract(text),
        phone_numbers: patterns.phone_numbers.extract(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_order_id_and_status() {
        let parsed = parse_order_response(
            "<OrderId>123</OrderId><ProcessingStatus>RECEIVED</ProcessingStatus>",
        );
        assert_eq!(
            parsed,
            ParsedOrderResponse {
                order_id: Some("123".to_owned()),
                processing_status: Some("RECEIVED".to_owned()),
                errors: vec![],
                warnings: vec![],
                phone_numbers: vec![],
            }
        );
    }

    #[test]
    fn collects_errors_in_document_order() {
        let parsed =
            parse_order_response("<Errors><Error>bad number</Error><Error>dup</Error></Errors>");
        assert_eq!(parsed.errors, vec!["bad number", "dup"]);
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn flat_container_text_becomes_single_entry() {
        let parsed = parse_order_response("<Errors>Some flat error text</Errors>");
        assert_eq!(parsed.errors, vec!["Some flat error text"]);

        let parsed = parse_order_response("<Warnings>\n  check campaign  \n</Warnings>");
        assert_eq!(parsed.warnings, vec!["check campaign"]);
    }

    #[test]
    fn extracts_telephone_numbers() {
        let parsed = parse_order_response(
            "<TelephoneNumbers><TelephoneNumber>+12025551234</TelephoneNumber></TelephoneNumbers>",
        );
        assert_eq!(parsed.phone_numbers, vec!["+12025551234"]);
    }

    #[test]
    fn garbage_yields_defaults() {
        assert_eq!(
            parse_order_response("not xml at all {\"status\": 42} <<<>>"),
            ParsedOrderResponse::default()
        );
        assert_eq!(parse_order_response(""), ParsedOrderResponse::default());
    }

    #[test]
    fn matching_ignores_case_and_attributes() {
        let parsed = parse_order_response(
            r#"<orderid type="uuid"> abc-1 </orderid><processingstatus>complete</processingstatus>"#,
        );
        assert_eq!(parsed.order_id.as_deref(), Some("abc-1"));
        assert_eq!(parsed.processing_status.as_deref(), Some("complete"));
    }

    #[test]
    fn empty_container_yields_empty_list() {
        let parsed = parse_order_response("<Errors>   </Errors><Warnings/>");
        assert!(parsed.errors.is_empty());
        assert!(parsed.warnings.is_empty());
    }

    #[test]
    fn only_first_single_value_is_used() {
        let parsed = parse_order_response("<OrderId>first</OrderId><OrderId>second</OrderId>");
        assert_eq!(parsed.order_id.as_deref(), Some("first"));
    }

    #[test]
    fn parses_tn_option_order_response() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<TnOptionOrderResponse>
    <TnOptionOrder>
        <OrderCreateDate>2024-05-01T17:22:09.612Z</OrderCreateDate>
        <AccountId>5005456</AccountId>
        <CreatedByUser>jdoe</CreatedByUser>
        <OrderId>ddbdc72e-dc27-490c-904e-d0c11291b095</OrderId>
        <LastModifiedDate>2024-05-01T17:22:09.612Z</LastModifiedDate>
        <ProcessingStatus>RECEIVED</ProcessingStatus>
        <CustomerOrderId>TnOptionOrder_AddCampaign</CustomerOrderId>
        <TnOptionGroups>
            <TnOptionGroup>
                <Sms>ON</Sms>
                <A2pSettings>
                    <Action>AS_SPECIFIED</Action>
                    <CampaignId>CABC123</CampaignId>
                </A2pSettings>
                <TelephoneNumbers>
                    <TelephoneNumber>2549465498</TelephoneNumber>
                    <TelephoneNumber>3612714600</TelephoneNumber>
                </TelephoneNumbers>
            </TnOptionGroup>
        </TnOptionGroups>
        <ErrorList/>
        <Warnings>
            <Warning>Campaign pending vetting</Warning>
        </Warnings>
    </TnOptionOrder>
</TnOptionOrderResponse>"#;

        let parsed = parse_order_response(xml);
        assert_eq!(
            parsed.order_id.as_deref(),
            Some("ddbdc72e-dc27-490c-904e-d0c11291b095")
        );
        assert_eq!(parsed.processing_status.as_deref(), Some("RECEIVED"));
        assert_eq!(parsed.phone_numbers, vec!["2549465498", "3612714600"]);
        assert_eq!(parsed.warnings, vec!["Campaign pending vetting"]);
        assert!(parsed.errors.is_empty());
    }
}
