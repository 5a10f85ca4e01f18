//! Settlement search query string

use crate::types::SettlementSearchRequest;
use url::form_urlencoded;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Build the `Search/Settlement` query string.
///
/// Fields go out in declaration order under their gateway names. Unset and
/// blank fields are left out, as are `Page` and `PageSize` when zero.
pub fn settlement_query(request: &SettlementSearchRequest) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    let mut push = |name: &str, value: Option<String>| {
        if let Some(value) = value.filter(|v| !v.trim().is_empty()) {
            query.append_pair(name, &value);
        }
    };

    push("ReportMode", Some(request.report_mode.as_str().to_string()));
    push(
        "SettlementDate",
        request.settlement_date.map(|d| d.format(DATE_FORMAT).to_string()),
    );
    push(
        "StartDate",
        request.start_date.map(|d| d.format(DATE_FORMAT).to_string()),
    );
    push(
        "EndDate",
        request.end_date.map(|d| d.format(DATE_FORMAT).to_string()),
    );
    push("CardType", request.card_type.map(|c| c.as_str().to_string()));
    push("Currency", request.currency.clone());
    push(
        "Page",
        (request.page != 0).then(|| request.page.to_string()),
    );
    push(
        "PageSize",
        (request.page_size != 0).then(|| request.page_size.to_string()),
    );

    query.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CardType, SettlementSearchMode};
    use chrono::NaiveDate;

    #[test]
    fn test_default_request_only_sends_report_mode() {
        assert_eq!(
            settlement_query(&SettlementSearchRequest::default()),
            "ReportMode=Both"
        );
    }

    #[test]
    fn test_full_request_in_declared_order() {
        let request = SettlementSearchRequest {
            report_mode: SettlementSearchMode::TransactionOnly,
            start_date: NaiveDate::from_ymd_opt(2016, 2, 1),
            end_date: NaiveDate::from_ymd_opt(2016, 2, 29),
            card_type: Some(CardType::Visa),
            currency: Some("AUD".into()),
            page: 2,
            page_size: 50,
            ..Default::default()
        };

        assert_eq!(
            settlement_query(&request),
            "ReportMode=TransactionOnly&StartDate=2016-02-01&EndDate=2016-02-29&CardType=VI&Currency=AUD&Page=2&PageSize=50"
        );
    }

    #[test]
    fn test_zero_paging_and_blank_currency_are_omitted() {
        let request = SettlementSearchRequest {
            settlement_date: NaiveDate::from_ymd_opt(2016, 2, 1),
            currency: Some("  ".into()),
            ..Default::default()
        };

        let query = settlement_query(&request);
        assert_eq!(query, "ReportMode=Both&SettlementDate=2016-02-01");
        assert!(!query.contains("Page"));
    }
}
