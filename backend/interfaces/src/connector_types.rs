use domain_types::{
    connector_flow,
    connector_types::{
        CancelSubscriptionData, CreateSubscriptionData, MandateFlowData, MandateResponseData,
        PaymentFlowData, PaymentVoidData, PaymentsAuthorizeData, PaymentsCaptureData,
        PaymentsResponseData, RefundFlowData, RefundsData, RefundsResponseData, RepeatPaymentData,
        RevokeMandateRequestData, SetupMandateRequestData, SubscriptionChargeData,
        SubscriptionFlowData, SubscriptionResponseData,
    },
};

use crate::{api::ConnectorCommon, connector_integration_v2::ConnectorIntegrationV2};

/// The full surface a connector must implement to be routable.
pub trait ConnectorServiceTrait:
    ConnectorCommon
    + ValidationTrait
    + PaymentAuthorizeV2
    + PaymentCaptureV2
    + PaymentVoidV2
    + RefundV2
    + SetupMandateV2
    + RevokeMandateV2
    + RepeatPaymentV2
    + SubscriptionCreateV2
    + SubscriptionCancelV2
    + SubscriptionChargeV2
{
}

pub type BoxedConnector = Box<&'static (dyn ConnectorServiceTrait + Sync)>;

pub trait ValidationTrait {
    /// Whether response hashes from this connector should be recomputed and
    /// checked before the response is trusted.
    fn should_verify_response_hash(&self) -> bool {
        true
    }
}

pub trait PaymentAuthorizeV2:
    ConnectorIntegrationV2<
    connector_flow::Authorize,
    PaymentFlowData,
    PaymentsAuthorizeData,
    PaymentsResponseData,
>
{
}

pub trait PaymentCaptureV2:
    ConnectorIntegrationV2<
    connector_flow::Capture,
    PaymentFlowData,
    PaymentsCaptureData,
    PaymentsResponseData,
>
{
}

pub trait PaymentVoidV2:
    ConnectorIntegrationV2<
    connector_flow::Void,
    PaymentFlowData,
    PaymentVoidData,
    PaymentsResponseData,
>
{
}

pub trait RefundV2:
    ConnectorIntegrationV2<connector_flow::Refund, RefundFlowData, RefundsData, RefundsResponseData>
{
}

pub trait SetupMandateV2:
    ConnectorIntegrationV2<
    connector_flow::SetupMandate,
    MandateFlowData,
    SetupMandateRequestData,
    MandateResponseData,
>
{
}

pub trait RevokeMandateV2:
    ConnectorIntegrationV2<
    connector_flow::RevokeMandate,
    MandateFlowData,
    RevokeMandateRequestData,
    MandateResponseData,
>
{
}

pub trait RepeatPaymentV2:
    ConnectorIntegrationV2<
    connector_flow::RepeatPayment,
    PaymentFlowData,
    RepeatPaymentData,
    PaymentsResponseData,
>
{
}

pub trait SubscriptionCreateV2:
    ConnectorIntegrationV2<
    connector_flow::CreateSubscription,
    SubscriptionFlowData,
    CreateSubscriptionData,
    SubscriptionResponseData,
>
{
}

pub trait SubscriptionCancelV2:
    ConnectorIntegrationV2<
    connector_flow::CancelSubscription,
    SubscriptionFlowData,
    CancelSubscriptionData,
    SubscriptionResponseData,
>
{
}

pub trait SubscriptionChargeV2:
    ConnectorIntegrationV2<
    connector_flow::SubscriptionCharge,
    PaymentFlowData,
    SubscriptionChargeData,
    PaymentsResponseData,
>
{
}
