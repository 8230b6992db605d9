#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::{marker::PhantomData, str::FromStr};

use common_enums::{
    AttemptStatus, CaptureMethod, Currency, MandateStatus, PaymentMethod, RefundStatus,
    SubscriptionStatus,
};
use common_utils::{
    crypto::{self, hex_digest, SignMessage},
    request::RequestContent,
    types::MinorUnit,
};
use domain_types::{
    connector_flow::{
        Authorize, CancelSubscription, Capture, CreateSubscription, Refund, RepeatPayment,
        RevokeMandate, SetupMandate, SubscriptionCharge, Void,
    },
    connector_types::{
        CancelSubscriptionData, CreateSubscriptionData, MandateFlowData, MandateResponseData,
        PaymentFlowData, PaymentVoidData, PaymentsAuthorizeData, PaymentsCaptureData,
        PaymentsResponseData, RefundFlowData, RefundsData, RefundsResponseData, RepeatPaymentData,
        ResponseId, RevokeMandateRequestData, SetupMandateRequestData, SubscriptionChargeData,
        SubscriptionFlowData, SubscriptionResponseData,
    },
    payment_method_data::{Card, CardNumber, CardType, PaymentMethodData},
    router_data::{ConnectorAuthType, ErrorResponse},
    router_data_v2::RouterDataV2,
    types::{ConnectorParams, Connectors},
};
use hyperswitch_masking::Secret;
use interfaces::{
    api::ConnectorCommon,
    connector_integration_v2::ConnectorIntegrationV2,
    verification::{ConnectorSourceVerificationSecrets, SourceVerification},
};

use super::{transformers::*, Worldnet, WorldnetRouterData};
use crate::types::ResponseRouterData;

const TERMINAL_ID: &str = "6491002";
const SHARED_SECRET: &str = "x4n35mynyzmcrg";
const ORDER_ID: &str = "ORDER001";

fn connectors() -> Connectors {
    Connectors {
        worldnet: ConnectorParams {
            base_url: "https://testpayments.worldnettps.com/".to_string(),
        },
    }
}

fn auth() -> ConnectorAuthType {
    ConnectorAuthType::SignatureKey {
        api_key: Secret::new(TERMINAL_ID.to_string()),
        key1: Secret::new("merchant".to_string()),
        api_secret: Secret::new(SHARED_SECRET.to_string()),
    }
}

fn card() -> Card {
    Card {
        card_number: CardNumber::from_str("4111111111111111").unwrap(),
        card_exp_month: Secret::new("12".to_string()),
        card_exp_year: Secret::new("2030".to_string()),
        card_cvc: Secret::new("123".to_string()),
        card_type: Some(CardType::Visa),
        card_holder_name: Some(Secret::new("Joe Bloggs".to_string())),
    }
}

fn payment_flow_data() -> PaymentFlowData {
    PaymentFlowData {
        payment_id: "pay_123".to_string(),
        attempt_id: "attempt_1".to_string(),
        status: AttemptStatus::Started,
        payment_method: PaymentMethod::Card,
        address: None,
        connector_request_reference_id: ORDER_ID.to_string(),
        connectors: connectors(),
    }
}

fn authorize_router_data(
    capture_method: Option<CaptureMethod>,
) -> RouterDataV2<Authorize, PaymentFlowData, PaymentsAuthorizeData, PaymentsResponseData> {
    RouterDataV2 {
        flow: PhantomData,
        resource_common_data: payment_flow_data(),
        connector_auth_type: auth(),
        request: PaymentsAuthorizeData {
            amount: MinorUnit::new(1000),
            currency: Currency::EUR,
            payment_method_data: PaymentMethodData::Card(card()),
            capture_method,
            email: None,
            description: None,
            customer_ip_address: None,
        },
        response: Err(ErrorResponse::default()),
    }
}

fn input<RD: crate::connectors::macros::FlowTypes>(router_data: RD) -> WorldnetRouterData<RD> {
    WorldnetRouterData {
        connector: Worldnet::new().to_owned(),
        router_data,
    }
}

fn element(xml: &str, tag: &str) -> String {
    let open = format!("<{tag}>");
    let close = format!("</{tag}>");
    let start = xml.find(&open).unwrap_or_else(|| panic!("{tag} missing")) + open.len();
    let end = xml[start..].find(&close).unwrap() + start;
    xml[start..end].to_string()
}

fn md5_hex(message: &str) -> String {
    let digest = crypto::Md5
        .sign_message(SHARED_SECRET.as_bytes(), message.as_bytes())
        .unwrap();
    hex_digest(&digest)
}

#[test]
fn authorize_automatic_capture_builds_payment_root() {
    let request =
        WorldnetPaymentRequest::try_from(input(authorize_router_data(Some(
            CaptureMethod::Automatic,
        ))))
        .unwrap();
    let xml = quick_xml::se::to_string(&request).unwrap();

    assert!(xml.starts_with("<PAYMENT>"));
    assert_eq!(element(&xml, "ORDERID"), ORDER_ID);
    assert_eq!(element(&xml, "TERMINALID"), TERMINAL_ID);
    assert_eq!(element(&xml, "AMOUNT"), "10.00");
    assert_eq!(element(&xml, "CARDTYPE"), "VISA");
    assert_eq!(element(&xml, "CARDEXPIRY"), "1230");
    assert_eq!(element(&xml, "TERMINALTYPE"), "2");
    assert_eq!(element(&xml, "TRANSACTIONTYPE"), "7");
}

#[test]
fn authorize_manual_capture_builds_preauth_root() {
    let request =
        WorldnetPaymentRequest::try_from(input(authorize_router_data(Some(CaptureMethod::Manual))))
            .unwrap();
    let xml = quick_xml::se::to_string(&request).unwrap();
    assert!(xml.starts_with("<PREAUTH>"));
}

#[test]
fn authorize_hash_covers_terminal_order_amount_datetime() {
    let request =
        WorldnetPaymentRequest::try_from(input(authorize_router_data(None))).unwrap();
    let xml = quick_xml::se::to_string(&request).unwrap();

    let date_time = element(&xml, "DATETIME");
    let expected = md5_hex(&format!("{TERMINAL_ID}{ORDER_ID}10.00{date_time}"));
    assert_eq!(element(&xml, "HASH"), expected);
}

#[test]
fn capture_hash_covers_terminal_uniqueref_amount_datetime() {
    let router_data: RouterDataV2<
        Capture,
        PaymentFlowData,
        PaymentsCaptureData,
        PaymentsResponseData,
    > = RouterDataV2 {
        flow: PhantomData,
        resource_common_data: payment_flow_data(),
        connector_auth_type: auth(),
        request: PaymentsCaptureData {
            amount_to_capture: MinorUnit::new(1000),
            currency: Currency::EUR,
            connector_transaction_id: ResponseId::ConnectorTransactionId("UNIQ123".to_string()),
        },
        response: Err(ErrorResponse::default()),
    };
    let request = WorldnetCaptureRequest::try_from(input(router_data)).unwrap();
    let xml = quick_xml::se::to_string(&request).unwrap();

    assert!(xml.starts_with("<PREAUTHCOMPLETION>"));
    assert_eq!(element(&xml, "UNIQUEREF"), "UNIQ123");
    assert_eq!(element(&xml, "AMOUNT"), "10.00");
    let date_time = element(&xml, "DATETIME");
    let expected = md5_hex(&format!("{TERMINAL_ID}UNIQ12310.00{date_time}"));
    assert_eq!(element(&xml, "HASH"), expected);
}

#[test]
fn void_hash_skips_amount() {
    let router_data: RouterDataV2<Void, PaymentFlowData, PaymentVoidData, PaymentsResponseData> =
        RouterDataV2 {
            flow: PhantomData,
            resource_common_data: payment_flow_data(),
            connector_auth_type: auth(),
            request: PaymentVoidData {
                connector_transaction_id: "UNIQ123".to_string(),
            },
            response: Err(ErrorResponse::default()),
        };
    let request = WorldnetVoidRequest::try_from(input(router_data)).unwrap();
    let xml = quick_xml::se::to_string(&request).unwrap();

    assert!(xml.starts_with("<VOID>"));
    let date_time = element(&xml, "DATETIME");
    let expected = md5_hex(&format!("{TERMINAL_ID}UNIQ123{date_time}"));
    assert_eq!(element(&xml, "HASH"), expected);
    assert!(!xml.contains("<AMOUNT>"));
}

#[test]
fn refund_request_carries_operator_and_reason_defaults() {
    let router_data: RouterDataV2<Refund, RefundFlowData, RefundsData, RefundsResponseData> =
        RouterDataV2 {
            flow: PhantomData,
            resource_common_data: RefundFlowData {
                status: RefundStatus::Pending,
                refund_id: Some("re_1".to_string()),
                connectors: connectors(),
            },
            connector_auth_type: auth(),
            request: RefundsData {
                connector_transaction_id: "UNIQ123".to_string(),
                refund_id: "re_1".to_string(),
                refund_amount: MinorUnit::new(550),
                currency: Currency::EUR,
                reason: None,
                operator: None,
            },
            response: Err(ErrorResponse::default()),
        };
    let request = WorldnetRefundRequest::try_from(input(router_data)).unwrap();
    let xml = quick_xml::se::to_string(&request).unwrap();

    assert!(xml.starts_with("<REFUND>"));
    assert_eq!(element(&xml, "AMOUNT"), "5.50");
    assert_eq!(element(&xml, "OPERATOR"), "merchant-api");
    assert_eq!(element(&xml, "REASON"), "Refund");

    let date_time = element(&xml, "DATETIME");
    let expected = md5_hex(&format!("{TERMINAL_ID}UNIQ1235.50{date_time}"));
    assert_eq!(element(&xml, "HASH"), expected);
}

#[test]
fn repeat_payment_uses_stored_card_reference() {
    let router_data: RouterDataV2<
        RepeatPayment,
        PaymentFlowData,
        RepeatPaymentData,
        PaymentsResponseData,
    > = RouterDataV2 {
        flow: PhantomData,
        resource_common_data: payment_flow_data(),
        connector_auth_type: auth(),
        request: RepeatPaymentData {
            amount: MinorUnit::new(1000),
            currency: Currency::EUR,
            card_reference: Secret::new("2967534111111111".to_string()),
            email: None,
            description: None,
        },
        response: Err(ErrorResponse::default()),
    };
    let request = WorldnetRepeatPaymentRequest::try_from(input(router_data)).unwrap();
    let xml = quick_xml::se::to_string(&request).unwrap();

    assert!(xml.starts_with("<PAYMENT>"));
    assert_eq!(element(&xml, "CARDTYPE"), "SECURECARD");
    assert_eq!(element(&xml, "CARDNUMBER"), "2967534111111111");
    assert!(!xml.contains("<CARDEXPIRY>"));
}

fn setup_mandate_router_data(
) -> RouterDataV2<SetupMandate, MandateFlowData, SetupMandateRequestData, MandateResponseData> {
    RouterDataV2 {
        flow: PhantomData,
        resource_common_data: MandateFlowData {
            status: MandateStatus::Pending,
            connectors: connectors(),
        },
        connector_auth_type: auth(),
        request: SetupMandateRequestData {
            payment_method_data: PaymentMethodData::Card(card()),
            merchant_reference: "CARDREF001".to_string(),
            email: None,
        },
        response: Err(ErrorResponse::default()),
    }
}

#[test]
fn card_registration_hash_covers_card_fields() {
    let request =
        WorldnetCardRegistrationRequest::try_from(input(setup_mandate_router_data())).unwrap();
    let xml = quick_xml::se::to_string(&request).unwrap();

    assert!(xml.starts_with("<SECURECARDREGISTRATION>"));
    let date_time = element(&xml, "DATETIME");
    let expected = md5_hex(&format!(
        "{TERMINAL_ID}CARDREF001{date_time}41111111111111111230VISAJoe Bloggs"
    ));
    assert_eq!(element(&xml, "HASH"), expected);
}

#[test]
fn card_registration_requires_holder_name() {
    let mut router_data = setup_mandate_router_data();
    router_data.request.payment_method_data = PaymentMethodData::Card(Card {
        card_holder_name: None,
        ..card()
    });
    assert!(WorldnetCardRegistrationRequest::try_from(input(router_data)).is_err());
}

#[test]
fn add_subscription_defaults_start_date_to_today() {
    let router_data: RouterDataV2<
        CreateSubscription,
        SubscriptionFlowData,
        CreateSubscriptionData,
        SubscriptionResponseData,
    > = RouterDataV2 {
        flow: PhantomData,
        resource_common_data: SubscriptionFlowData {
            status: SubscriptionStatus::Pending,
            connectors: connectors(),
        },
        connector_auth_type: auth(),
        request: CreateSubscriptionData {
            merchant_reference: "SUB001".to_string(),
            stored_subscription_reference: "PLAN-MONTHLY".to_string(),
            secure_card_merchant_reference: "CARDREF001".to_string(),
            start_date: None,
            end_date: None,
        },
        response: Err(ErrorResponse::default()),
    };
    let request = WorldnetAddSubscriptionRequest::try_from(input(router_data)).unwrap();
    let xml = quick_xml::se::to_string(&request).unwrap();

    assert!(xml.starts_with("<ADDSUBSCRIPTION>"));
    let start_date = element(&xml, "STARTDATE");
    assert_eq!(start_date.len(), "DD-MM-YYYY".len());
    assert!(!xml.contains("<ENDDATE>"));

    let date_time = element(&xml, "DATETIME");
    let expected = md5_hex(&format!("{TERMINAL_ID}SUB001CARDREF001{date_time}{start_date}"));
    assert_eq!(element(&xml, "HASH"), expected);
}

#[test]
fn subscription_payment_hash_covers_subscription_reference() {
    let router_data: RouterDataV2<
        SubscriptionCharge,
        PaymentFlowData,
        SubscriptionChargeData,
        PaymentsResponseData,
    > = RouterDataV2 {
        flow: PhantomData,
        resource_common_data: payment_flow_data(),
        connector_auth_type: auth(),
        request: SubscriptionChargeData {
            subscription_reference: "SUB001".to_string(),
            amount: MinorUnit::new(1000),
            currency: Currency::EUR,
            description: None,
        },
        response: Err(ErrorResponse::default()),
    };
    let request = WorldnetSubscriptionPaymentRequest::try_from(input(router_data)).unwrap();
    let xml = quick_xml::se::to_string(&request).unwrap();

    assert!(xml.starts_with("<SUBSCRIPTIONPAYMENT>"));
    assert_eq!(element(&xml, "SUBSCRIPTIONREF"), "SUB001");
    assert_eq!(element(&xml, "AMOUNT"), "10.00");
    let date_time = element(&xml, "DATETIME");
    let expected = md5_hex(&format!("{TERMINAL_ID}{ORDER_ID}10.00SUB001{date_time}"));
    assert_eq!(element(&xml, "HASH"), expected);
}

#[test]
fn get_url_is_the_single_xml_endpoint() {
    let router_data = authorize_router_data(None);
    let url = ConnectorIntegrationV2::<
        Authorize,
        PaymentFlowData,
        PaymentsAuthorizeData,
        PaymentsResponseData,
    >::get_url(Worldnet::new(), &router_data)
    .unwrap();
    assert_eq!(
        url,
        "https://testpayments.worldnettps.com/merchant/xmlpayment"
    );
}

#[test]
fn get_request_body_renders_xml_content() {
    let router_data = authorize_router_data(None);
    let body = ConnectorIntegrationV2::<
        Authorize,
        PaymentFlowData,
        PaymentsAuthorizeData,
        PaymentsResponseData,
    >::get_request_body(Worldnet::new(), &router_data)
    .unwrap()
    .unwrap();
    assert!(matches!(body, RequestContent::Xml(_)));
}

// ------------------------------------------------------------------
// Response handling
// ------------------------------------------------------------------

fn approved_payment_response() -> WorldnetPaymentsResponse {
    WorldnetPaymentsResponse {
        unique_ref: Some("UNIQ123".to_string()),
        response_code: Some("A".to_string()),
        response_text: Some("APPROVAL".to_string()),
        approval_code: Some("475318".to_string()),
        date_time: Some("12-08-2026:21:30:45:123".to_string()),
        avs_response: Some("Y".to_string()),
        cvv_response: Some("M".to_string()),
        hash: None,
        error_string: None,
        error_code: None,
    }
}

#[test]
fn approved_payment_maps_to_charged() {
    let router_data = RouterDataV2::try_from(ResponseRouterData {
        response: approved_payment_response(),
        router_data: authorize_router_data(Some(CaptureMethod::Automatic)),
        http_code: 200,
    })
    .unwrap();

    assert_eq!(router_data.resource_common_data.status, AttemptStatus::Charged);
    let PaymentsResponseData::TransactionResponse {
        resource_id,
        approval_code,
        ..
    } = router_data.response.unwrap();
    assert_eq!(
        resource_id,
        ResponseId::ConnectorTransactionId("UNIQ123".to_string())
    );
    assert_eq!(approval_code.as_deref(), Some("475318"));
}

#[test]
fn approved_preauth_maps_to_authorized() {
    let router_data = RouterDataV2::try_from(ResponseRouterData {
        response: approved_payment_response(),
        router_data: authorize_router_data(Some(CaptureMethod::Manual)),
        http_code: 200,
    })
    .unwrap();
    assert_eq!(
        router_data.resource_common_data.status,
        AttemptStatus::Authorized
    );
}

#[test]
fn declined_payment_maps_to_error_response() {
    let response = WorldnetPaymentsResponse {
        response_code: Some("D".to_string()),
        response_text: Some("DECLINED".to_string()),
        ..approved_payment_response()
    };
    let router_data = RouterDataV2::try_from(ResponseRouterData {
        response,
        router_data: authorize_router_data(None),
        http_code: 200,
    })
    .unwrap();

    assert_eq!(router_data.resource_common_data.status, AttemptStatus::Failure);
    let error = router_data.response.unwrap_err();
    assert_eq!(error.code, "D");
    assert_eq!(error.message, "DECLINED");
    assert_eq!(error.connector_transaction_id.as_deref(), Some("UNIQ123"));
}

#[test]
fn referral_is_treated_as_failure() {
    let response = WorldnetPaymentsResponse {
        response_code: Some("R".to_string()),
        response_text: Some("REFERRAL B".to_string()),
        ..approved_payment_response()
    };
    let router_data = RouterDataV2::try_from(ResponseRouterData {
        response,
        router_data: authorize_router_data(None),
        http_code: 200,
    })
    .unwrap();
    assert_eq!(router_data.resource_common_data.status, AttemptStatus::Failure);
    assert!(router_data.response.is_err());
}

#[test]
fn gateway_error_document_maps_to_error_response() {
    let response = WorldnetPaymentsResponse {
        unique_ref: None,
        response_code: None,
        response_text: None,
        error_string: Some("Invalid HASH field".to_string()),
        ..approved_payment_response()
    };
    let router_data = RouterDataV2::try_from(ResponseRouterData {
        response,
        router_data: authorize_router_data(None),
        http_code: 200,
    })
    .unwrap();

    let error = router_data.response.unwrap_err();
    assert_eq!(error.message, "Invalid HASH field");
}

#[test]
fn response_without_code_or_error_fails_parsing() {
    let response = WorldnetPaymentsResponse {
        response_code: None,
        error_string: None,
        ..approved_payment_response()
    };
    assert!(RouterDataV2::try_from(ResponseRouterData {
        response,
        router_data: authorize_router_data(None),
        http_code: 200,
    })
    .is_err());
}

#[test]
fn card_registration_response_maps_to_active_mandate() {
    let response = WorldnetSecureCardResponse {
        merchant_ref: Some("CARDREF001".to_string()),
        card_reference: Some("2967534111111111".to_string()),
        response_code: Some("A".to_string()),
        response_text: Some("SUCCESS".to_string()),
        date_time: Some("12-08-2026:21:30:45:123".to_string()),
        hash: None,
        error_string: None,
        error_code: None,
    };
    let router_data = RouterDataV2::try_from(ResponseRouterData {
        response,
        router_data: setup_mandate_router_data(),
        http_code: 200,
    })
    .unwrap();

    assert_eq!(router_data.resource_common_data.status, MandateStatus::Active);
    let mandate = router_data.response.unwrap();
    assert!(mandate.mandate_reference.is_some());
    assert_eq!(mandate.merchant_reference.as_deref(), Some("CARDREF001"));
}

#[test]
fn cancel_subscription_response_maps_to_cancelled() {
    let router_data: RouterDataV2<
        CancelSubscription,
        SubscriptionFlowData,
        CancelSubscriptionData,
        SubscriptionResponseData,
    > = RouterDataV2 {
        flow: PhantomData,
        resource_common_data: SubscriptionFlowData {
            status: SubscriptionStatus::Active,
            connectors: connectors(),
        },
        connector_auth_type: auth(),
        request: CancelSubscriptionData {
            merchant_reference: "SUB001".to_string(),
        },
        response: Err(ErrorResponse::default()),
    };
    let response = WorldnetSubscriptionResponse {
        merchant_ref: Some("SUB001".to_string()),
        response_code: Some("A".to_string()),
        response_text: Some("SUCCESS".to_string()),
        date_time: Some("12-08-2026:21:30:45:123".to_string()),
        hash: None,
        error_string: None,
        error_code: None,
    };
    let router_data = RouterDataV2::try_from(ResponseRouterData {
        response,
        router_data,
        http_code: 200,
    })
    .unwrap();

    assert_eq!(
        router_data.resource_common_data.status,
        SubscriptionStatus::Cancelled
    );
    assert_eq!(
        router_data.response.unwrap().merchant_reference.as_deref(),
        Some("SUB001")
    );
}

// ------------------------------------------------------------------
// Response hash verification
// ------------------------------------------------------------------

fn signed_payment_response_xml(response_text: &str, tamper: bool) -> String {
    let unique_ref = "UNIQ123";
    let date_time = "12-08-2026:21:30:45:123";
    let hash = md5_hex(&format!(
        "{TERMINAL_ID}{unique_ref}10.00{date_time}A{response_text}"
    ));
    let rendered_text = if tamper { "TAMPERED" } else { response_text };
    format!(
        "<PAYMENTRESPONSE>\
         <UNIQUEREF>{unique_ref}</UNIQUEREF>\
         <RESPONSECODE>A</RESPONSECODE>\
         <RESPONSETEXT>{rendered_text}</RESPONSETEXT>\
         <APPROVALCODE>475318</APPROVALCODE>\
         <DATETIME>{date_time}</DATETIME>\
         <HASH>{hash}</HASH>\
         </PAYMENTRESPONSE>"
    )
}

fn try_verify_authorize(
    payload: &str,
) -> Result<bool, error_stack::Report<domain_types::errors::ConnectorError>> {
    let router_data = authorize_router_data(None);
    SourceVerification::<Authorize, PaymentFlowData, PaymentsAuthorizeData, PaymentsResponseData>::verify(
        Worldnet::new(),
        &router_data,
        ConnectorSourceVerificationSecrets::AuthHeaders(auth()),
        payload.as_bytes(),
    )
}

fn verify_authorize(payload: &str) -> bool {
    try_verify_authorize(payload).unwrap()
}

#[test]
fn valid_response_hash_verifies() {
    assert!(verify_authorize(&signed_payment_response_xml("APPROVAL", false)));
}

#[test]
fn tampered_response_hash_fails_verification() {
    assert!(!verify_authorize(&signed_payment_response_xml("APPROVAL", true)));
}

#[test]
fn unsigned_error_document_passes_verification() {
    let payload = "<ERROR><ERRORSTRING>Invalid TERMINALID</ERRORSTRING></ERROR>";
    assert!(verify_authorize(payload));
}

#[test]
fn approved_response_without_hash_fails_verification() {
    let payload = "<PAYMENTRESPONSE>\
         <UNIQUEREF>UNIQ123</UNIQUEREF>\
         <RESPONSECODE>A</RESPONSECODE>\
         <RESPONSETEXT>APPROVAL</RESPONSETEXT>\
         <APPROVALCODE>475318</APPROVALCODE>\
         <DATETIME>12-08-2026:21:30:45:123</DATETIME>\
         </PAYMENTRESPONSE>";
    assert!(try_verify_authorize(payload).is_err());
}

#[test]
fn card_registration_response_without_hash_fails_verification() {
    let payload = "<SECURECARDREGISTRATIONRESPONSE>\
         <MERCHANTREF>CARDREF001</MERCHANTREF>\
         <CARDREFERENCE>2967534111111111</CARDREFERENCE>\
         <DATETIME>12-08-2026:21:30:45:123</DATETIME>\
         </SECURECARDREGISTRATIONRESPONSE>";
    let router_data = setup_mandate_router_data();
    let result = SourceVerification::<
        SetupMandate,
        MandateFlowData,
        SetupMandateRequestData,
        MandateResponseData,
    >::verify(
        Worldnet::new(),
        &router_data,
        ConnectorSourceVerificationSecrets::AuthHeaders(auth()),
        payload.as_bytes(),
    );
    assert!(result.is_err());
}

#[test]
fn handle_response_verifies_parses_and_maps() {
    let router_data = authorize_router_data(Some(CaptureMethod::Automatic));
    let res = domain_types::router_response_types::Response {
        headers: None,
        response: bytes::Bytes::from(signed_payment_response_xml("APPROVAL", false)),
        status_code: 200,
    };
    let result = ConnectorIntegrationV2::<
        Authorize,
        PaymentFlowData,
        PaymentsAuthorizeData,
        PaymentsResponseData,
    >::handle_response_v2(Worldnet::new(), &router_data, None, res)
    .unwrap();

    assert_eq!(result.resource_common_data.status, AttemptStatus::Charged);
}

#[test]
fn handle_response_rejects_bad_hash() {
    let router_data = authorize_router_data(Some(CaptureMethod::Automatic));
    let res = domain_types::router_response_types::Response {
        headers: None,
        response: bytes::Bytes::from(signed_payment_response_xml("APPROVAL", true)),
        status_code: 200,
    };
    assert!(ConnectorIntegrationV2::<
        Authorize,
        PaymentFlowData,
        PaymentsAuthorizeData,
        PaymentsResponseData,
    >::handle_response_v2(Worldnet::new(), &router_data, None, res)
    .is_err());
}

#[test]
fn handle_response_rejects_missing_hash() {
    let router_data = authorize_router_data(Some(CaptureMethod::Automatic));
    let res = domain_types::router_response_types::Response {
        headers: None,
        response: bytes::Bytes::from_static(
            b"<PAYMENTRESPONSE>\
              <UNIQUEREF>UNIQ123</UNIQUEREF>\
              <RESPONSECODE>A</RESPONSECODE>\
              <RESPONSETEXT>APPROVAL</RESPONSETEXT>\
              <DATETIME>12-08-2026:21:30:45:123</DATETIME>\
              </PAYMENTRESPONSE>",
        ),
        status_code: 200,
    };
    assert!(ConnectorIntegrationV2::<
        Authorize,
        PaymentFlowData,
        PaymentsAuthorizeData,
        PaymentsResponseData,
    >::handle_response_v2(Worldnet::new(), &router_data, None, res)
    .is_err());
}

#[test]
fn revoke_mandate_response_hash_verifies() {
    let merchant_ref = "CARDREF001";
    let card_reference = "2967534111111111";
    let date_time = "12-08-2026:21:30:45:123";
    let hash = md5_hex(&format!(
        "{TERMINAL_ID}ASUCCESS{merchant_ref}{card_reference}{date_time}"
    ));
    let payload = format!(
        "<SECURECARDREMOVALRESPONSE>\
         <MERCHANTREF>{merchant_ref}</MERCHANTREF>\
         <CARDREFERENCE>{card_reference}</CARDREFERENCE>\
         <RESPONSECODE>A</RESPONSECODE>\
         <RESPONSETEXT>SUCCESS</RESPONSETEXT>\
         <DATETIME>{date_time}</DATETIME>\
         <HASH>{hash}</HASH>\
         </SECURECARDREMOVALRESPONSE>"
    );

    let router_data: RouterDataV2<
        RevokeMandate,
        MandateFlowData,
        RevokeMandateRequestData,
        MandateResponseData,
    > = RouterDataV2 {
        flow: PhantomData,
        resource_common_data: MandateFlowData {
            status: MandateStatus::Active,
            connectors: connectors(),
        },
        connector_auth_type: auth(),
        request: RevokeMandateRequestData {
            merchant_reference: merchant_ref.to_string(),
            card_reference: Secret::new(card_reference.to_string()),
        },
        response: Err(ErrorResponse::default()),
    };
    let verified = SourceVerification::<
        RevokeMandate,
        MandateFlowData,
        RevokeMandateRequestData,
        MandateResponseData,
    >::verify(
        Worldnet::new(),
        &router_data,
        ConnectorSourceVerificationSecrets::AuthHeaders(auth()),
        payload.as_bytes(),
    )
    .unwrap();
    assert!(verified);
}

#[test]
fn build_error_response_parses_error_document() {
    let res = domain_types::router_response_types::Response {
        headers: None,
        response: bytes::Bytes::from_static(
            b"<ERROR><ERRORSTRING>Invalid TERMINALID field</ERRORSTRING></ERROR>",
        ),
        status_code: 200,
    };
    let error = Worldnet::new().build_error_response(res, None).unwrap();
    assert_eq!(error.message, "Invalid TERMINALID field");
    assert_eq!(error.reason.as_deref(), Some("Invalid TERMINALID field"));
}
