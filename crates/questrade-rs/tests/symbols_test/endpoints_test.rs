use crate::common::*;
use questrade_rs::symbols::models::*;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
#[tokio::test]
async fn test_get_symbols() {
    let server = MockServer::start().await;
    let client = setup_logged_in_client(&server).await;
    Mock::given(method("GET"))
        .and(path("/v1/symbols"))
        .and(query_param("ids", "8049,9291"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "symbols": [
                {"symbol": "AAPL", "symbolId": 8049, "prevDayClosePrice": 102.5,
                 "highPrice52": 102.9, "lowPrice52": 63.89, "averageVol3Months": 43769680,
                 "averageVol20Days": 12860370, "outstandingShares": 5987867000u64,
                 "eps": 6.2, "pe": 16.54, "dividend": 0.47, "yield": 1.84,
                 "exDate": "2014-08-07T00:00:00.000000-04:00", "marketCap": 613756367500.0,
                 "optionType": null, "optionDurationType": null, "optionRoot": "",
                 "optionContractDeliverables": {"underlyings": [], "cashInLieu": 0},
                 "optionExerciseType": null, "listingExchange": "NASDAQ",
                 "description": "APPLE INC", "securityType": "Stock",
                 "optionExpiryDate": null, "dividendDate": "2014-08-14T00:00:00.000000-04:00",
                 "optionStrikePrice": null, "isQuotable": true, "hasOptions": true,
                 "currency": "USD", "minTicks": [{"pivot": 0, "minTick": 0.0001}, {"pivot": 1, "minTick": 0.01}]},
                {"symbol": "BMO", "symbolId": 9291, "description": "BANK OF MONTREAL"}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let symbols = client.get_symbols(&[8049, 9291]).await.unwrap();
    assert_eq!(symbols.len(), 2);
    assert_eq!(symbols[0].yield_, Some(1.84));
    assert_eq!(symbols[0].min_ticks.len(), 2);
    assert_eq!(symbols[0].to_string(), "AAPL (8049): APPLE INC");
    assert_eq!(symbols[1].symbol, "BMO");
    assert!(symbols[1].eps.is_none());
}
#[tokio::test]
async fn test_search_symbols() {
    let server = MockServer::start().await;
    let client = setup_logged_in_client(&server).await;
    Mock::given(method("GET"))
        .and(path("/v1/symbols/search"))
        .and(query_param("prefix", "BMO"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "symbols": [{
                "symbol": "BMO", "symbolId": 9292, "description": "BANK OF MONTREAL",
                "securityType": "Stock", "listingExchange": "NYSE",
                "isQuotable": true, "isTradable": true, "currency": "USD"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let results = client.search_symbols("BMO", 0).await.unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].to_string(), "BMO (9292) on NYSE");
}
#[tokio::test]
async fn test_get_option_chain() {
    let server = MockServer::start().await;
    let client = setup_logged_in_client(&server).await;
    Mock::given(method("GET"))
        .and(path("/v1/symbols/9291/options"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "optionChain": [{
                "expiryDate": "2015-01-17T00:00:00.000000-05:00",
                "description": "BANK OF MONTREAL",
                "listingExchange": "MX",
                "optionExerciseType": "American",
                "chainPerRoot": [{
                    "optionRoot": "BMO",
                    "chainPerStrikePrice": [
                        {"strikePrice": 60, "callSymbolId": 6101993, "putSymbolId": 6102009},
                        {"strikePrice": 62, "callSymbolId": 6101994, "putSymbolId": 6102010}
                    ],
                    "multiplier": 100
                }]
            }]
        })))
        .mount(&server)
        .await;

    let chain = client.get_option_chain(9291).await.unwrap();
    assert_eq!(chain.len(), 1);
    let root = &chain[0].chain_per_root[0];
    assert_eq!(root.option_root, "BMO");
    assert_eq!(root.multiplier, 100);
    assert_eq!(root.chain_per_strike_price[1].call_symbol_id, 6101994);
}
#[test]
fn test_option_chain_accepts_legacy_keys() {
    let json = r#"{"expiryDate":null,"chainPerRoot":[{"root":"XYZ","chainPerStrikePrice":[],"multiplier":10}]}"#;
    let chain: OptionChain = serde_json::from_str(json).unwrap();
    assert_eq!(chain.chain_per_root[0].option_root, "XYZ");
    assert!(chain.expiry_date.is_none());
}
