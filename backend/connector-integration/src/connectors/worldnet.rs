pub mod transformers;

#[cfg(test)]
mod test;

use common_enums::CurrencyUnit;
use common_utils::{
    consts, crypto, errors::CustomResult, ext_traits::BytesExt, request::RequestContent,
    types::StringMajorUnit,
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
        RevokeMandateRequestData, SetupMandateRequestData, SubscriptionChargeData,
        SubscriptionFlowData, SubscriptionResponseData,
    },
    errors::ConnectorError,
    router_data::ErrorResponse,
    router_data_v2::RouterDataV2,
    router_response_types::Response,
    types::Connectors,
};
use error_stack::ResultExt;
use hyperswitch_masking::{Maskable, PeekInterface};
use interfaces::{
    api::ConnectorCommon,
    connector_integration_v2::ConnectorIntegrationV2,
    connector_types::{
        ConnectorServiceTrait, PaymentAuthorizeV2, PaymentCaptureV2, PaymentVoidV2, RefundV2,
        RepeatPaymentV2, RevokeMandateV2, SetupMandateV2, SubscriptionCancelV2,
        SubscriptionChargeV2, SubscriptionCreateV2, ValidationTrait,
    },
    events::connector_api_logs::ConnectorEvent,
    verification::{ConnectorSourceVerificationSecrets, SourceVerification},
};
use transformers::{
    payment_response_hash_message, secure_card_response_hash_message,
    subscription_response_hash_message, WorldnetAddSubscriptionRequest,
    WorldnetAddSubscriptionResponse, WorldnetAuthType, WorldnetCaptureRequest,
    WorldnetCaptureResponse, WorldnetCardRegistrationRequest, WorldnetCardRegistrationResponse,
    WorldnetCardRemovalRequest, WorldnetCardRemovalResponse, WorldnetDeleteSubscriptionRequest,
    WorldnetDeleteSubscriptionResponse, WorldnetErrorResponse, WorldnetPaymentRequest,
    WorldnetPaymentsResponse, WorldnetRefundRequest, WorldnetRefundResponse,
    WorldnetRepeatPaymentRequest, WorldnetRepeatPaymentResponse, WorldnetSecureCardResponse,
    WorldnetSubscriptionPaymentRequest, WorldnetSubscriptionPaymentResponse,
    WorldnetSubscriptionResponse, WorldnetVoidRequest, WorldnetVoidResponse,
};

use super::macros;
use crate::{types::ResponseRouterData, with_error_response_body};

pub(crate) mod headers {
    pub(crate) const CONTENT_TYPE: &str = "Content-Type";
}

/// Every operation posts to the same endpoint, the root element of the XML
/// document selects the transaction type.
const XML_PAYMENT_PATH: &str = "merchant/xmlpayment";

macros::create_all_prerequisites!(
    connector_name: Worldnet,
    api: [
        (
            flow: Authorize,
            request_body: WorldnetPaymentRequest,
            response_body: WorldnetPaymentsResponse,
            router_data: RouterDataV2<Authorize, PaymentFlowData, PaymentsAuthorizeData, PaymentsResponseData>
        ),
        (
            flow: Capture,
            request_body: WorldnetCaptureRequest,
            response_body: WorldnetCaptureResponse,
            router_data: RouterDataV2<Capture, PaymentFlowData, PaymentsCaptureData, PaymentsResponseData>
        ),
        (
            flow: Void,
            request_body: WorldnetVoidRequest,
            response_body: WorldnetVoidResponse,
            router_data: RouterDataV2<Void, PaymentFlowData, PaymentVoidData, PaymentsResponseData>
        ),
        (
            flow: Refund,
            request_body: WorldnetRefundRequest,
            response_body: WorldnetRefundResponse,
            router_data: RouterDataV2<Refund, RefundFlowData, RefundsData, RefundsResponseData>
        ),
        (
            flow: SetupMandate,
            request_body: WorldnetCardRegistrationRequest,
            response_body: WorldnetCardRegistrationResponse,
            router_data: RouterDataV2<SetupMandate, MandateFlowData, SetupMandateRequestData, MandateResponseData>
        ),
        (
            flow: RevokeMandate,
            request_body: WorldnetCardRemovalRequest,
            response_body: WorldnetCardRemovalResponse,
            router_data: RouterDataV2<RevokeMandate, MandateFlowData, RevokeMandateRequestData, MandateResponseData>
        ),
        (
            flow: RepeatPayment,
            request_body: WorldnetRepeatPaymentRequest,
            response_body: WorldnetRepeatPaymentResponse,
            router_data: RouterDataV2<RepeatPayment, PaymentFlowData, RepeatPaymentData, PaymentsResponseData>
        ),
        (
            flow: CreateSubscription,
            request_body: WorldnetAddSubscriptionRequest,
            response_body: WorldnetAddSubscriptionResponse,
            router_data: RouterDataV2<CreateSubscription, SubscriptionFlowData, CreateSubscriptionData, SubscriptionResponseData>
        ),
        (
            flow: CancelSubscription,
            request_body: WorldnetDeleteSubscriptionRequest,
            response_body: WorldnetDeleteSubscriptionResponse,
            router_data: RouterDataV2<CancelSubscription, SubscriptionFlowData, CancelSubscriptionData, SubscriptionResponseData>
        ),
        (
            flow: SubscriptionCharge,
            request_body: WorldnetSubscriptionPaymentRequest,
            response_body: WorldnetSubscriptionPaymentResponse,
            router_data: RouterDataV2<SubscriptionCharge, PaymentFlowData, SubscriptionChargeData, PaymentsResponseData>
        )
    ],
    amount_converters: [
        amount_converter: StringMajorUnit
    ],
    member_functions: {
        pub fn build_headers<F, FCD, Req, Res>(
            &self,
            _req: &RouterDataV2<F, FCD, Req, Res>,
        ) -> CustomResult<Vec<(String, Maskable<String>)>, ConnectorError> {
            Ok(vec![(
                headers::CONTENT_TYPE.to_string(),
                self.common_get_content_type().to_string().into(),
            )])
        }

        pub fn connector_base_url_payments<'a, F, Req, Res>(
            &self,
            req: &'a RouterDataV2<F, PaymentFlowData, Req, Res>,
        ) -> &'a str {
            &req.resource_common_data.connectors.worldnet.base_url
        }

        pub fn connector_base_url_refunds<'a, F, Req, Res>(
            &self,
            req: &'a RouterDataV2<F, RefundFlowData, Req, Res>,
        ) -> &'a str {
            &req.resource_common_data.connectors.worldnet.base_url
        }

        pub fn connector_base_url_mandates<'a, F, Req, Res>(
            &self,
            req: &'a RouterDataV2<F, MandateFlowData, Req, Res>,
        ) -> &'a str {
            &req.resource_common_data.connectors.worldnet.base_url
        }

        pub fn connector_base_url_subscriptions<'a, F, Req, Res>(
            &self,
            req: &'a RouterDataV2<F, SubscriptionFlowData, Req, Res>,
        ) -> &'a str {
            &req.resource_common_data.connectors.worldnet.base_url
        }
    }
);

impl ConnectorCommon for Worldnet {
    fn id(&self) -> &'static str {
        "worldnet"
    }

    fn get_currency_unit(&self) -> CurrencyUnit {
        CurrencyUnit::Base
    }

    fn common_get_content_type(&self) -> &'static str {
        consts::XML_CONTENT_TYPE
    }

    fn base_url<'a>(&self, connectors: &'a Connectors) -> &'a str {
        &connectors.worldnet.base_url
    }

    fn build_error_response(
        &self,
        res: Response,
        event_builder: Option<&mut ConnectorEvent>,
    ) -> CustomResult<ErrorResponse, ConnectorError> {
        let response: WorldnetErrorResponse = res
            .response
            .parse_xml("WorldnetErrorResponse")
            .change_context(ConnectorError::ResponseDeserializationFailed)?;

        with_error_response_body!(event_builder, response);

        Ok(ErrorResponse {
            code: response
                .error_code
                .unwrap_or_else(|| consts::NO_ERROR_CODE.to_string()),
            message: response
                .error_string
                .clone()
                .unwrap_or_else(|| consts::NO_ERROR_MESSAGE.to_string()),
            reason: response.error_string,
            status_code: res.status_code,
            attempt_status: None,
            connector_transaction_id: None,
            raw_connector_response: String::from_utf8(res.response.to_vec()).ok(),
        })
    }
}

impl ConnectorServiceTrait for Worldnet {}
impl ValidationTrait for Worldnet {}
impl PaymentAuthorizeV2 for Worldnet {}
impl PaymentCaptureV2 for Worldnet {}
impl PaymentVoidV2 for Worldnet {}
impl RefundV2 for Worldnet {}
impl SetupMandateV2 for Worldnet {}
impl RevokeMandateV2 for Worldnet {}
impl RepeatPaymentV2 for Worldnet {}
impl SubscriptionCreateV2 for Worldnet {}
impl SubscriptionCancelV2 for Worldnet {}
impl SubscriptionChargeV2 for Worldnet {}

macros::macro_connector_implementation!(
    connector_default_implementations: [get_headers, get_content_type, get_error_response_v2],
    connector: Worldnet,
    curl_request: Xml(WorldnetPaymentRequest),
    curl_response: WorldnetPaymentsResponse,
    flow_name: Authorize,
    resource_common_data: PaymentFlowData,
    flow_request: PaymentsAuthorizeData,
    flow_response: PaymentsResponseData,
    http_method: Post,
    other_functions: {
        fn get_url(
            &self,
            req: &RouterDataV2<Authorize, PaymentFlowData, PaymentsAuthorizeData, PaymentsResponseData>,
        ) -> CustomResult<String, ConnectorError> {
            Ok(format!("{}{XML_PAYMENT_PATH}", self.connector_base_url_payments(req)))
        }
    }
);

macros::macro_connector_implementation!(
    connector_default_implementations: [get_headers, get_content_type, get_error_response_v2],
    connector: Worldnet,
    curl_request: Xml(WorldnetCaptureRequest),
    curl_response: WorldnetCaptureResponse,
    flow_name: Capture,
    resource_common_data: PaymentFlowData,
    flow_request: PaymentsCaptureData,
    flow_response: PaymentsResponseData,
    http_method: Post,
    other_functions: {
        fn get_url(
            &self,
            req: &RouterDataV2<Capture, PaymentFlowData, PaymentsCaptureData, PaymentsResponseData>,
        ) -> CustomResult<String, ConnectorError> {
            Ok(format!("{}{XML_PAYMENT_PATH}", self.connector_base_url_payments(req)))
        }
    }
);

macros::macro_connector_implementation!(
    connector_default_implementations: [get_headers, get_content_type, get_error_response_v2],
    connector: Worldnet,
    curl_request: Xml(WorldnetVoidRequest),
    curl_response: WorldnetVoidResponse,
    flow_name: Void,
    resource_common_data: PaymentFlowData,
    flow_request: PaymentVoidData,
    flow_response: PaymentsResponseData,
    http_method: Post,
    other_functions: {
        fn get_url(
            &self,
            req: &RouterDataV2<Void, PaymentFlowData, PaymentVoidData, PaymentsResponseData>,
        ) -> CustomResult<String, ConnectorError> {
            Ok(format!("{}{XML_PAYMENT_PATH}", self.connector_base_url_payments(req)))
        }
    }
);

macros::macro_connector_implementation!(
    connector_default_implementations: [get_headers, get_content_type, get_error_response_v2],
    connector: Worldnet,
    curl_request: Xml(WorldnetRefundRequest),
    curl_response: WorldnetRefundResponse,
    flow_name: Refund,
    resource_common_data: RefundFlowData,
    flow_request: RefundsData,
    flow_response: RefundsResponseData,
    http_method: Post,
    other_functions: {
        fn get_url(
            &self,
            req: &RouterDataV2<Refund, RefundFlowData, RefundsData, RefundsResponseData>,
        ) -> CustomResult<String, ConnectorError> {
            Ok(format!("{}{XML_PAYMENT_PATH}", self.connector_base_url_refunds(req)))
        }
    }
);

macros::macro_connector_implementation!(
    connector_default_implementations: [get_headers, get_content_type, get_error_response_v2],
    connector: Worldnet,
    curl_request: Xml(WorldnetCardRegistrationRequest),
    curl_response: WorldnetCardRegistrationResponse,
    flow_name: SetupMandate,
    resource_common_data: MandateFlowData,
    flow_request: SetupMandateRequestData,
    flow_response: MandateResponseData,
    http_method: Post,
    other_functions: {
        fn get_url(
            &self,
            req: &RouterDataV2<SetupMandate, MandateFlowData, SetupMandateRequestData, MandateResponseData>,
        ) -> CustomResult<String, ConnectorError> {
            Ok(format!("{}{XML_PAYMENT_PATH}", self.connector_base_url_mandates(req)))
        }
    }
);

macros::macro_connector_implementation!(
    connector_default_implementations: [get_headers, get_content_type, get_error_response_v2],
    connector: Worldnet,
    curl_request: Xml(WorldnetCardRemovalRequest),
    curl_response: WorldnetCardRemovalResponse,
    flow_name: RevokeMandate,
    resource_common_data: MandateFlowData,
    flow_request: RevokeMandateRequestData,
    flow_response: MandateResponseData,
    http_method: Post,
    other_functions: {
        fn get_url(
            &self,
            req: &RouterDataV2<RevokeMandate, MandateFlowData, RevokeMandateRequestData, MandateResponseData>,
        ) -> CustomResult<String, ConnectorError> {
            Ok(format!("{}{XML_PAYMENT_PATH}", self.connector_base_url_mandates(req)))
        }
    }
);

macros::macro_connector_implementation!(
    connector_default_implementations: [get_headers, get_content_type, get_error_response_v2],
    connector: Worldnet,
    curl_request: Xml(WorldnetRepeatPaymentRequest),
    curl_response: WorldnetRepeatPaymentResponse,
    flow_name: RepeatPayment,
    resource_common_data: PaymentFlowData,
    flow_request: RepeatPaymentData,
    flow_response: PaymentsResponseData,
    http_method: Post,
    other_functions: {
        fn get_url(
            &self,
            req: &RouterDataV2<RepeatPayment, PaymentFlowData, RepeatPaymentData, PaymentsResponseData>,
        ) -> CustomResult<String, ConnectorError> {
            Ok(format!("{}{XML_PAYMENT_PATH}", self.connector_base_url_payments(req)))
        }
    }
);

macros::macro_connector_implementation!(
    connector_default_implementations: [get_headers, get_content_type, get_error_response_v2],
    connector: Worldnet,
    curl_request: Xml(WorldnetAddSubscriptionRequest),
    curl_response: WorldnetAddSubscriptionResponse,
    flow_name: CreateSubscription,
    resource_common_data: SubscriptionFlowData,
    flow_request: CreateSubscriptionData,
    flow_response: SubscriptionResponseData,
    http_method: Post,
    other_functions: {
        fn get_url(
            &self,
            req: &RouterDataV2<CreateSubscription, SubscriptionFlowData, CreateSubscriptionData, SubscriptionResponseData>,
        ) -> CustomResult<String, ConnectorError> {
            Ok(format!("{}{XML_PAYMENT_PATH}", self.connector_base_url_subscriptions(req)))
        }
    }
);

macros::macro_connector_implementation!(
    connector_default_implementations: [get_headers, get_content_type, get_error_response_v2],
    connector: Worldnet,
    curl_request: Xml(WorldnetDeleteSubscriptionRequest),
    curl_response: WorldnetDeleteSubscriptionResponse,
    flow_name: CancelSubscription,
    resource_common_data: SubscriptionFlowData,
    flow_request: CancelSubscriptionData,
    flow_response: SubscriptionResponseData,
    http_method: Post,
    other_functions: {
        fn get_url(
            &self,
            req: &RouterDataV2<CancelSubscription, SubscriptionFlowData, CancelSubscriptionData, SubscriptionResponseData>,
        ) -> CustomResult<String, ConnectorError> {
            Ok(format!("{}{XML_PAYMENT_PATH}", self.connector_base_url_subscriptions(req)))
        }
    }
);

macros::macro_connector_implementation!(
    connector_default_implementations: [get_headers, get_content_type, get_error_response_v2],
    connector: Worldnet,
    curl_request: Xml(WorldnetSubscriptionPaymentRequest),
    curl_response: WorldnetSubscriptionPaymentResponse,
    flow_name: SubscriptionCharge,
    resource_common_data: PaymentFlowData,
    flow_request: SubscriptionChargeData,
    flow_response: PaymentsResponseData,
    http_method: Post,
    other_functions: {
        fn get_url(
            &self,
            req: &RouterDataV2<SubscriptionCharge, PaymentFlowData, SubscriptionChargeData, PaymentsResponseData>,
        ) -> CustomResult<String, ConnectorError> {
            Ok(format!("{}{XML_PAYMENT_PATH}", self.connector_base_url_payments(req)))
        }
    }
);

fn worldnet_verification_secret(
    secrets: ConnectorSourceVerificationSecrets,
) -> CustomResult<Vec<u8>, ConnectorError> {
    match secrets {
        ConnectorSourceVerificationSecrets::AuthHeaders(auth) => {
            let auth = WorldnetAuthType::try_from(&auth)?;
            Ok(auth.shared_secret.peek().as_bytes().to_vec())
        }
    }
}

fn parse_verification_payload<T: serde::de::DeserializeOwned>(
    payload: &[u8],
    type_name: &'static str,
) -> CustomResult<T, ConnectorError> {
    bytes::Bytes::copy_from_slice(payload)
        .parse_xml(type_name)
        .change_context(ConnectorError::ResponseDeserializationFailed)
}

macro_rules! impl_payment_hash_verification {
    (
        flow: $flow: ty,
        resource_common_data: $fcd: ty,
        flow_request: $request: ty,
        flow_response: $response: ty,
        amount: |$this: ident, $rd: ident| $amount: expr
    ) => {
        impl SourceVerification<$flow, $fcd, $request, $response> for Worldnet {
            fn get_secrets(
                &self,
                secrets: ConnectorSourceVerificationSecrets,
            ) -> CustomResult<Vec<u8>, ConnectorError> {
                worldnet_verification_secret(secrets)
            }

            fn get_algorithm(
                &self,
            ) -> CustomResult<Box<dyn crypto::VerifySignature + Send>, ConnectorError> {
                Ok(Box::new(crypto::Md5))
            }

            fn get_signature(
                &self,
                payload: &[u8],
                _router_data: &RouterDataV2<$flow, $fcd, $request, $response>,
                _secrets: &[u8],
            ) -> CustomResult<Vec<u8>, ConnectorError> {
                let response: WorldnetPaymentsResponse =
                    parse_verification_payload(payload, "WorldnetPaymentsResponse")?;
                response.signature_bytes()
            }

            fn get_message(
                &self,
                payload: &[u8],
                router_data: &RouterDataV2<$flow, $fcd, $request, $response>,
                _secrets: &[u8],
            ) -> CustomResult<Vec<u8>, ConnectorError> {
                let response: WorldnetPaymentsResponse =
                    parse_verification_payload(payload, "WorldnetPaymentsResponse")?;
                let auth = WorldnetAuthType::try_from(&router_data.connector_auth_type)?;
                let $this = self;
                let $rd = router_data;
                // The gateway never echoes AMOUNT, the request value feeds the
                // response hash.
                let amount: Option<StringMajorUnit> = $amount;
                Ok(payment_response_hash_message(
                    auth.terminal_id.peek(),
                    amount.as_ref().map(|value| value.get_amount_as_string()),
                    &response,
                )
                .into_bytes())
            }
        }
    };
}

impl_payment_hash_verification!(
    flow: Authorize,
    resource_common_data: PaymentFlowData,
    flow_request: PaymentsAuthorizeData,
    flow_response: PaymentsResponseData,
    amount: |this, rd| Some(
        this.amount_converter
            .convert(rd.request.amount, rd.request.currency)
            .change_context(ConnectorError::AmountConversionFailed)?
    )
);

impl_payment_hash_verification!(
    flow: Capture,
    resource_common_data: PaymentFlowData,
    flow_request: PaymentsCaptureData,
    flow_response: PaymentsResponseData,
    amount: |this, rd| Some(
        this.amount_converter
            .convert(rd.request.amount_to_capture, rd.request.currency)
            .change_context(ConnectorError::AmountConversionFailed)?
    )
);

impl_payment_hash_verification!(
    flow: Void,
    resource_common_data: PaymentFlowData,
    flow_request: PaymentVoidData,
    flow_response: PaymentsResponseData,
    amount: |_this, _rd| None
);

impl_payment_hash_verification!(
    flow: Refund,
    resource_common_data: RefundFlowData,
    flow_request: RefundsData,
    flow_response: RefundsResponseData,
    amount: |this, rd| Some(
        this.amount_converter
            .convert(rd.request.refund_amount, rd.request.currency)
            .change_context(ConnectorError::AmountConversionFailed)?
    )
);

impl_payment_hash_verification!(
    flow: RepeatPayment,
    resource_common_data: PaymentFlowData,
    flow_request: RepeatPaymentData,
    flow_response: PaymentsResponseData,
    amount: |this, rd| Some(
        this.amount_converter
            .convert(rd.request.amount, rd.request.currency)
            .change_context(ConnectorError::AmountConversionFailed)?
    )
);

impl_payment_hash_verification!(
    flow: SubscriptionCharge,
    resource_common_data: PaymentFlowData,
    flow_request: SubscriptionChargeData,
    flow_response: PaymentsResponseData,
    amount: |this, rd| Some(
        this.amount_converter
            .convert(rd.request.amount, rd.request.currency)
            .change_context(ConnectorError::AmountConversionFailed)?
    )
);

macro_rules! impl_secure_card_hash_verification {
    (flow: $flow: ty, flow_request: $request: ty) => {
        impl SourceVerification<$flow, MandateFlowData, $request, MandateResponseData>
            for Worldnet
        {
            fn get_secrets(
                &self,
                secrets: ConnectorSourceVerificationSecrets,
            ) -> CustomResult<Vec<u8>, ConnectorError> {
                worldnet_verification_secret(secrets)
            }

            fn get_algorithm(
                &self,
            ) -> CustomResult<Box<dyn crypto::VerifySignature + Send>, ConnectorError> {
                Ok(Box::new(crypto::Md5))
            }

            fn get_signature(
                &self,
                payload: &[u8],
                _router_data: &RouterDataV2<$flow, MandateFlowData, $request, MandateResponseData>,
                _secrets: &[u8],
            ) -> CustomResult<Vec<u8>, ConnectorError> {
                let response: WorldnetSecureCardResponse =
                    parse_verification_payload(payload, "WorldnetSecureCardResponse")?;
                response.signature_bytes()
            }

            fn get_message(
                &self,
                payload: &[u8],
                router_data: &RouterDataV2<$flow, MandateFlowData, $request, MandateResponseData>,
                _secrets: &[u8],
            ) -> CustomResult<Vec<u8>, ConnectorError> {
                let response: WorldnetSecureCardResponse =
                    parse_verification_payload(payload, "WorldnetSecureCardResponse")?;
                let auth = WorldnetAuthType::try_from(&router_data.connector_auth_type)?;
                Ok(
                    secure_card_response_hash_message(auth.terminal_id.peek(), &response)
                        .into_bytes(),
                )
            }
        }
    };
}

impl_secure_card_hash_verification!(flow: SetupMandate, flow_request: SetupMandateRequestData);
impl_secure_card_hash_verification!(flow: RevokeMandate, flow_request: RevokeMandateRequestData);

macro_rules! impl_subscription_hash_verification {
    (flow: $flow: ty, flow_request: $request: ty) => {
        impl
            SourceVerification<$flow, SubscriptionFlowData, $request, SubscriptionResponseData>
            for Worldnet
        {
            fn get_secrets(
                &self,
                secrets: ConnectorSourceVerificationSecrets,
            ) -> CustomResult<Vec<u8>, ConnectorError> {
                worldnet_verification_secret(secrets)
            }

            fn get_algorithm(
                &self,
            ) -> CustomResult<Box<dyn crypto::VerifySignature + Send>, ConnectorError> {
                Ok(Box::new(crypto::Md5))
            }

            fn get_signature(
                &self,
                payload: &[u8],
                _router_data: &RouterDataV2<
                    $flow,
                    SubscriptionFlowData,
                    $request,
                    SubscriptionResponseData,
                >,
                _secrets: &[u8],
            ) -> CustomResult<Vec<u8>, ConnectorError> {
                let response: WorldnetSubscriptionResponse =
                    parse_verification_payload(payload, "WorldnetSubscriptionResponse")?;
                response.signature_bytes()
            }

            fn get_message(
                &self,
                payload: &[u8],
                router_data: &RouterDataV2<
                    $flow,
                    SubscriptionFlowData,
                    $request,
                    SubscriptionResponseData,
                >,
                _secrets: &[u8],
            ) -> CustomResult<Vec<u8>, ConnectorError> {
                let response: WorldnetSubscriptionResponse =
                    parse_verification_payload(payload, "WorldnetSubscriptionResponse")?;
                let auth = WorldnetAuthType::try_from(&router_data.connector_auth_type)?;
                Ok(
                    subscription_response_hash_message(auth.terminal_id.peek(), &response)
                        .into_bytes(),
                )
            }
        }
    };
}

impl_subscription_hash_verification!(flow: CreateSubscription, flow_request: CreateSubscriptionData);
impl_subscription_hash_verification!(flow: CancelSubscription, flow_request: CancelSubscriptionData);
