use serde_json::json;

use common::decimal::{pow10, scaled_amount};
use common::error::Error;
use common::model::admin::{Asset, CreateUserRequest, DepositRequest, SymbolSpec, SymbolType};
use common::model::trade::{
    CancelOrderRequest, MoveOrderRequest, OrderAction, OrderType, PlaceOrderRequest,
};

// Admin API bodies must match the gateway's JSON byte for byte: camelCase
// keys, integer codes, and no extra fields.
mod admin_models {
    use super::*;

    #[test]
    fn test_create_user_body() {
        let body = serde_json::to_value(CreateUserRequest { uid: 1 }).unwrap();
        assert_eq!(body, json!({ "uid": 1 }));
    }

    #[test]
    fn test_asset_body() {
        let asset = Asset {
            asset_code: "BTC".to_string(),
            asset_id: 1,
            scale: 6,
        };
        let body = serde_json::to_value(&asset).unwrap();
        assert_eq!(
            body,
            json!({ "assetCode": "BTC", "assetId": 1, "scale": 6 })
        );
    }

    #[test]
    fn test_default_symbol_body() {
        let body = serde_json::to_value(SymbolSpec::default()).unwrap();
        assert_eq!(
            body,
            json!({
                "symbolId": 1,
                "symbolCode": "BTCUSDT",
                "symbolType": 0,
                "baseAsset": "BTC",
                "quoteCurrency": "USDT",
                "lotSize": 1.0,
                "stepSize": 1.0,
                "takerFee": 0.0,
                "makerFee": 0.0,
                "marginBuy": 0.0,
                "marginSell": 0.0,
                "priceHighLimit": 10000000.0,
                "priceLowLimit": 0.000001
            })
        );
    }

    #[test]
    fn test_symbol_type_codes() {
        assert_eq!(
            serde_json::to_value(SymbolType::CurrencyExchangePair).unwrap(),
            json!(0)
        );
        assert_eq!(
            serde_json::to_value(SymbolType::FuturesContract).unwrap(),
            json!(1)
        );

        let pair: SymbolType = serde_json::from_value(json!(0)).unwrap();
        assert_eq!(pair, SymbolType::CurrencyExchangePair);
        assert!(serde_json::from_value::<SymbolType>(json!(7)).is_err());
    }

    #[test]
    fn test_deposit_body_scales_the_amount() {
        let deposit = DepositRequest::new(42, "BTC", 100_000, 6).unwrap();
        assert_eq!(deposit.amount, 100_000_000_000);

        let body = serde_json::to_value(&deposit).unwrap();
        assert_eq!(
            body,
            json!({
                "transactionId": 42,
                "amount": 100_000_000_000i64,
                "currency": "BTC"
            })
        );
    }

    #[test]
    fn test_deposit_at_scale_zero_is_identity() {
        let deposit = DepositRequest::new(1, "USDT", 100_000, 0).unwrap();
        assert_eq!(deposit.amount, 100_000);
    }

    #[test]
    fn test_deposit_overflow_is_rejected() {
        let err = DepositRequest::new(1, "BTC", 100_000, 19).unwrap_err();
        assert!(matches!(err, Error::ValidationError(_)));
    }
}

mod trade_models {
    use super::*;

    #[test]
    fn test_order_action_codes() {
        assert_eq!(serde_json::to_value(OrderAction::Ask).unwrap(), json!(0));
        assert_eq!(serde_json::to_value(OrderAction::Bid).unwrap(), json!(1));

        let bid: OrderAction = serde_json::from_value(json!(1)).unwrap();
        assert_eq!(bid, OrderAction::Bid);
        assert!(serde_json::from_value::<OrderAction>(json!(2)).is_err());
    }

    #[test]
    fn test_order_type_codes() {
        assert_eq!(serde_json::to_value(OrderType::GTC).unwrap(), json!(0));
        assert_eq!(serde_json::to_value(OrderType::IOC).unwrap(), json!(1));
        assert!(serde_json::from_value::<OrderType>(json!(255)).is_err());
    }

    #[test]
    fn test_order_action_parsing() {
        assert_eq!("ask".parse::<OrderAction>().unwrap(), OrderAction::Ask);
        assert_eq!("SELL".parse::<OrderAction>().unwrap(), OrderAction::Ask);
        assert_eq!("0".parse::<OrderAction>().unwrap(), OrderAction::Ask);
        assert_eq!("bid".parse::<OrderAction>().unwrap(), OrderAction::Bid);
        assert_eq!("buy".parse::<OrderAction>().unwrap(), OrderAction::Bid);
        assert!(matches!(
            "hold".parse::<OrderAction>(),
            Err(Error::ValidationError(_))
        ));
    }

    #[test]
    fn test_order_type_parsing() {
        assert_eq!("gtc".parse::<OrderType>().unwrap(), OrderType::GTC);
        assert_eq!("IOC".parse::<OrderType>().unwrap(), OrderType::IOC);
        assert!("fok".parse::<OrderType>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parsing() {
        for action in [OrderAction::Ask, OrderAction::Bid] {
            assert_eq!(action.to_string().parse::<OrderAction>().unwrap(), action);
        }
        for order_type in [OrderType::GTC, OrderType::IOC] {
            assert_eq!(
                order_type.to_string().parse::<OrderType>().unwrap(),
                order_type
            );
        }
        for symbol_type in [
            SymbolType::CurrencyExchangePair,
            SymbolType::FuturesContract,
        ] {
            assert_eq!(
                symbol_type.to_string().parse::<SymbolType>().unwrap(),
                symbol_type
            );
        }
    }

    #[test]
    fn test_place_order_body() {
        let order = PlaceOrderRequest {
            price: 8010,
            size: 5,
            user_cookie: 2,
            action: OrderAction::Bid,
            order_type: OrderType::GTC,
        };
        let body = serde_json::to_value(&order).unwrap();
        assert_eq!(
            body,
            json!({
                "price": 8010,
                "size": 5,
                "userCookie": 2,
                "action": 1,
                "orderType": 0
            })
        );
    }

    #[test]
    fn test_cancel_order_body() {
        let cancel = CancelOrderRequest {
            order_id: 77,
            symbol: "BTCUSDT".to_string(),
            uid: 2,
        };
        let body = serde_json::to_value(&cancel).unwrap();
        assert_eq!(
            body,
            json!({ "orderId": 77, "symbol": "BTCUSDT", "uid": 2 })
        );
    }

    #[test]
    fn test_move_order_body() {
        let relocate = MoveOrderRequest {
            order_id: 77,
            symbol: "BTCUSDT".to_string(),
            uid: 2,
            price: 8200,
        };
        let body = serde_json::to_value(&relocate).unwrap();
        assert_eq!(
            body,
            json!({ "orderId": 77, "symbol": "BTCUSDT", "uid": 2, "price": 8200 })
        );
    }
}

mod amount_scaling {
    use super::*;

    #[test]
    fn test_pow10() {
        assert_eq!(pow10(0), Some(1));
        assert_eq!(pow10(6), Some(1_000_000));
        assert_eq!(pow10(18), Some(1_000_000_000_000_000_000));
        assert_eq!(pow10(19), None);
    }

    #[test]
    fn test_scaled_amount() {
        assert_eq!(scaled_amount(1, 0), Some(1));
        assert_eq!(scaled_amount(100_000, 6), Some(100_000_000_000));
        assert_eq!(scaled_amount(0, 8), Some(0));
        assert_eq!(scaled_amount(i64::MAX, 1), None);
    }
}
