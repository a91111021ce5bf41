#![cfg(feature = "http-client")]

use std::{collections::HashMap, time::Duration};

use axum::{Router, extract::Query, http::StatusCode, routing::post};
use maib_ecomm::{
    Client, Config,
    errors::{ConfigError, Error},
    requests::{CloseDay, RegisterTransaction, TransactionStatus},
    transport::HttpTransport,
    types::{Currency, Language, PaymentServerResult, TransactionResult},
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use url::Url;

const PATH: &str = "/ecomm2/MerchantHandler";

async fn merchant_handler(Query(params): Query<HashMap<String, String>>) -> (StatusCode, String) {
    let body = match params.get("command").map(String::as_str) {
        Some("v") if params.get("amount").map(String::as_str) == Some("1000") => {
            "TRANSACTION_ID: abcdefghijklmnopqrstuvwxyz1=\n"
        }
        Some("c") => {
            "RESULT: OK\nRESULT_PS: FINISHED\nRESULT_CODE: 000\n3DSECURE: AUTHENTICATED\nRRN: 412345678901\nAPPROVAL_CODE: 123456\nCARD_NUMBER: 4***********1111\n"
        }
        Some("b") => {
            tokio::time::sleep(Duration::from_secs(5)).await;
            "RESULT: OK\n"
        }
        _ => return (StatusCode::INTERNAL_SERVER_ERROR, "error: wrong command".into()),
    };
    (StatusCode::OK, body.into())
}

async fn serve() -> Url {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let router = Router::new().route(PATH, post(merchant_handler));

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    Url::parse(&format!("http://{addr}{PATH}")).unwrap()
}

fn http_client(endpoint: Url, timeout: Option<Duration>) -> Client<HttpTransport> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    Client::with_transport(endpoint, HttpTransport::from_client(builder.build().unwrap()))
}

#[tokio::test]
async fn test_register_and_check_status() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let client = http_client(serve().await, None);

    let registered = client
        .execute(
            &RegisterTransaction::builder()
                .amount(1000)
                .currency(Currency::EUR)
                .client_ip_address("127.0.0.1")
                .description("10 EUR will be charged")
                .language(Language::ENGLISH)
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(registered.transaction_id, "abcdefghijklmnopqrstuvwxyz1=");

    let status = client
        .execute(
            &TransactionStatus::builder()
                .transaction_id(registered.transaction_id)
                .client_ip_address("127.0.0.1")
                .build(),
        )
        .await
        .unwrap();
    assert_eq!(status.result, Some(TransactionResult::Ok));
    assert_eq!(status.result_ps, Some(PaymentServerResult::Finished));
    assert_eq!(status.result_code, 0);
    assert_eq!(status.rrn, 412345678901);
    assert_eq!(status.approval_code, 123456);
}

#[tokio::test]
async fn test_server_error_is_gateway_error() {
    let client = http_client(serve().await, None);

    let request = RegisterTransaction::builder()
        .amount(1)
        .currency(Currency::MDL)
        .client_ip_address("127.0.0.1")
        .language(Language::ROMANIAN)
        .build();

    match client.send(&request).await.unwrap_err() {
        Error::Gateway(err) => {
            assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(err.body, "error: wrong command");
        }
        other => panic!("expected gateway error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_transport_timeout() {
    let client = http_client(serve().await, Some(Duration::from_millis(100)));

    let err = client.send(&CloseDay).await.unwrap_err();
    assert!(matches!(err, Error::Timeout), "{err:?}");
}

#[tokio::test]
async fn test_cancel_in_flight_request() {
    let client = http_client(serve().await, None);
    let cancel = CancellationToken::new();

    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        trigger.cancel();
    });

    let err = client
        .send_with_cancel(&CloseDay, &cancel)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Cancelled), "{err:?}");
}

#[tokio::test]
async fn test_send_with_timeout() {
    let client = http_client(serve().await, None);

    let err = client
        .send_with_timeout(&CloseDay, Duration::from_millis(100))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Timeout), "{err:?}");
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = http_client(
        Url::parse(&format!("http://{addr}{PATH}")).unwrap(),
        None,
    );

    let err = client.send(&CloseDay).await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)), "{err:?}");
}

#[test]
fn test_client_setup_errors() {
    let config = |endpoint: &str, pfx_path: std::path::PathBuf| {
        Config::builder()
            .pfx_path(pfx_path)
            .passphrase("secret")
            .merchant_handler_endpoint(endpoint)
            .build()
    };
    let missing = std::env::temp_dir().join("maib-ecomm-missing.pfx");

    let err = Client::new(config("not a url", missing.clone())).unwrap_err();
    assert!(matches!(err, ConfigError::ParseEndpoint(_)), "{err:?}");

    let err = Client::new(config("https://localhost/ecomm", missing)).unwrap_err();
    assert!(matches!(err, ConfigError::ReadCertificate(_)), "{err:?}");

    let garbage = std::env::temp_dir().join("maib-ecomm-garbage.pfx");
    std::fs::write(&garbage, b"not a pkcs12 bundle").unwrap();
    let err = Client::new(config("https://localhost/ecomm", garbage.clone())).unwrap_err();
    std::fs::remove_file(garbage).unwrap();
    assert!(matches!(err, ConfigError::LoadCertificate(_)), "{err:?}");
}
