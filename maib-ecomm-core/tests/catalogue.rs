use maib_ecomm_core::{
    request::{COMMAND_PARAM, Request},
    requests::{
        CloseDay, CloseDayResult, DeleteRecurring, ExecuteDms, ExecuteDmsResult, ExecuteOneClick,
        ExecuteRecurring, RegisterOneClick, RegisterOneClickType, RegisterRecurring,
        RegisterTransaction, RegisterTransactionResult, ReverseTransaction, TransactionStatus,
        TransactionStatusResult,
    },
    response::{ResponseValue, decode_response, parse_body},
    types::{Currency, Language, PayloadField, TransactionResult},
};
use url::form_urlencoded;

const TRANSACTION_ID: &str = "abcdefghijklmnopqrstuvwxyz1=";

fn decoded_pairs(encoded: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(encoded.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

fn decoded_field(pairs: &[(String, String)], name: PayloadField) -> String {
    pairs
        .iter()
        .find(|(k, _)| k == name.as_str())
        .map(|(_, v)| v.clone())
        .unwrap()
}

#[test]
fn test_every_request_sets_command_once() {
    let requests: Vec<(Box<dyn Fn() -> String>, &str)> = vec![
        (
            Box::new(|| {
                RegisterTransaction::builder()
                    .amount(1)
                    .currency(Currency::MDL)
                    .client_ip_address("127.0.0.1")
                    .language(Language::ROMANIAN)
                    .build()
                    .values()
                    .unwrap()
                    .encode()
            }),
            "v",
        ),
        (
            Box::new(|| {
                TransactionStatus::builder()
                    .transaction_id(TRANSACTION_ID)
                    .client_ip_address("::1")
                    .build()
                    .values()
                    .unwrap()
                    .encode()
            }),
            "c",
        ),
        (
            Box::new(|| {
                ExecuteDms::builder()
                    .transaction_id(TRANSACTION_ID)
                    .amount(1)
                    .currency(Currency::MDL)
                    .client_ip_address("127.0.0.1")
                    .build()
                    .values()
                    .unwrap()
                    .encode()
            }),
            "t",
        ),
        (
            Box::new(|| {
                ReverseTransaction::builder()
                    .transaction_id(TRANSACTION_ID)
                    .amount(1)
                    .build()
                    .values()
                    .unwrap()
                    .encode()
            }),
            "r",
        ),
        (Box::new(|| CloseDay.values().unwrap().encode()), "b"),
        (
            Box::new(|| {
                RegisterRecurring::builder()
                    .amount(0)
                    .currency(Currency::MDL)
                    .client_ip_address("127.0.0.1")
                    .language(Language::RUSSIAN)
                    .perspayee_expiry("0130")
                    .build()
                    .values()
                    .unwrap()
                    .encode()
            }),
            "p",
        ),
        (
            Box::new(|| {
                ExecuteRecurring::builder()
                    .amount(1)
                    .currency(Currency::MDL)
                    .client_ip_address("127.0.0.1")
                    .biller_client_id("biller")
                    .build()
                    .values()
                    .unwrap()
                    .encode()
            }),
            "e",
        ),
        (
            Box::new(|| {
                DeleteRecurring::builder()
                    .biller_client_id("biller")
                    .build()
                    .values()
                    .unwrap()
                    .encode()
            }),
            "x",
        ),
        (
            Box::new(|| {
                RegisterOneClick::builder()
                    .transaction_type(RegisterOneClickType::WithoutPayment)
                    .currency(Currency::MDL)
                    .client_ip_address("127.0.0.1")
                    .language(Language::ENGLISH)
                    .perspayee_expiry("1299")
                    .build()
                    .values()
                    .unwrap()
                    .encode()
            }),
            "p",
        ),
        (
            Box::new(|| {
                ExecuteOneClick::builder()
                    .amount(1)
                    .currency(Currency::MDL)
                    .client_ip_address("127.0.0.1")
                    .biller_client_id("biller")
                    .build()
                    .values()
                    .unwrap()
                    .encode()
            }),
            "f",
        ),
    ];

    for (encode, tag) in requests {
        let pairs = decoded_pairs(&encode());
        let commands: Vec<_> = pairs.iter().filter(|(k, _)| k == COMMAND_PARAM).collect();

        assert_eq!(commands.len(), 1, "command must be set exactly once");
        assert_eq!(commands[0].1, tag);
    }
}

#[test]
fn test_encoded_request_revalidates() {
    let request = RegisterTransaction::builder()
        .amount(999_999_999_999)
        .currency(Currency(978))
        .client_ip_address("2001:db8::1")
        .description("Ticket: 2 adults & 1 child = 3 seats")
        .language(Language::from("a".repeat(32)))
        .build();

    let pairs = decoded_pairs(&request.values().unwrap().encode());
    let field = |name| decoded_field(&pairs, name);

    let rebuilt = RegisterTransaction::builder()
        .amount(field(PayloadField::Amount).parse().unwrap())
        .currency(field(PayloadField::Currency).parse::<u16>().unwrap())
        .client_ip_address(field(PayloadField::ClientIpAddress))
        .description(field(PayloadField::Description))
        .language(Language::from(field(PayloadField::Language)))
        .build();

    assert_eq!(rebuilt, request);
    assert!(rebuilt.values().is_ok());
}

#[test]
fn test_encoded_status_request_revalidates() {
    let request = TransactionStatus::builder()
        .transaction_id("ab+/efghijklmnopqrstuvwxyz1=")
        .client_ip_address("10.0.0.1")
        .build();

    let encoded = request.values().unwrap().encode();
    assert!(encoded.contains("trans_id=ab%2B%2Fefghijklmnopqrstuvwxyz1%3D"));

    let pairs = decoded_pairs(&encoded);
    let field = |name| decoded_field(&pairs, name);

    let rebuilt = TransactionStatus::builder()
        .transaction_id(field(PayloadField::TransactionId))
        .client_ip_address(field(PayloadField::ClientIpAddress))
        .build();

    assert_eq!(rebuilt, request);
    assert!(rebuilt.values().is_ok());
}

#[test]
fn test_encoded_recurring_request_revalidates() {
    let request = RegisterRecurring::builder()
        .amount(2500)
        .currency(Currency::USD)
        .client_ip_address("192.168.1.10")
        .description("Monthly plan: 25 USD")
        .language(Language::RUSSIAN)
        .biller_client_id("client+42/plan=gold")
        .perspayee_expiry("0927")
        .build();

    let pairs = decoded_pairs(&request.values().unwrap().encode());
    let field = |name| decoded_field(&pairs, name);

    let rebuilt = RegisterRecurring::builder()
        .amount(field(PayloadField::Amount).parse().unwrap())
        .currency(field(PayloadField::Currency).parse::<u16>().unwrap())
        .client_ip_address(field(PayloadField::ClientIpAddress))
        .description(field(PayloadField::Description))
        .language(Language::from(field(PayloadField::Language)))
        .biller_client_id(field(PayloadField::BillerClientId))
        .perspayee_expiry(field(PayloadField::PerspayeeExpiry))
        .overwrite_existing(pairs.iter().any(|(k, _)| k == "perspayee_overwrite"))
        .build();

    assert_eq!(rebuilt, request);
    assert!(rebuilt.values().is_ok());
}

#[test]
fn test_one_response_map_feeds_any_result() {
    let body = "\
TRANSACTION_ID: abcdefghijklmnopqrstuvwxyz1=
RESULT: OK
RESULT_CODE: 000
RRN: 412345678901
APPROVAL_CODE: 654321
CARD_NUMBER: 4***********1111
FLD_074: 3
";
    let map = parse_body(body).unwrap();
    assert_eq!(map["FLD_074"], ResponseValue::Integer(3));

    let register: RegisterTransactionResult = decode_response(&map).unwrap();
    assert_eq!(register.transaction_id, TRANSACTION_ID);

    let status: TransactionStatusResult = decode_response(&map).unwrap();
    assert_eq!(status.result, Some(TransactionResult::Ok));
    assert_eq!(status.rrn, 412345678901);
    assert!(status.result_ps.is_none());

    let execute: ExecuteDmsResult = decode_response(&map).unwrap();
    assert_eq!(execute.approval_code, 654321);
    assert_eq!(execute.card_number, "4***********1111");

    let close: CloseDayResult = decode_response(&map).unwrap();
    assert_eq!(close.credit_transaction_number, 3);
    assert_eq!(close.debit_reversal_amount, 0);
}
