use common_enums::{
    AttemptStatus, CaptureMethod, Currency, MandateStatus, PaymentMethod, RefundStatus,
    SubscriptionStatus,
};
use common_utils::{pii::Email, types::MinorUnit};
use hyperswitch_masking::Secret;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    errors::{ApiError, ApplicationErrorResponse, ConnectorError},
    types::Connectors,
    utils::ForeignTryFrom,
};

#[derive(Clone, Debug)]
pub enum ConnectorEnum {
    Worldnet,
}

impl ForeignTryFrom<&str> for ConnectorEnum {
    type Error = ApplicationErrorResponse;

    fn foreign_try_from(connector: &str) -> Result<Self, error_stack::Report<Self::Error>> {
        match connector {
            "worldnet" => Ok(Self::Worldnet),
            _ => Err(ApplicationErrorResponse::BadRequest(ApiError {
                sub_code: "INVALID_CONNECTOR".to_owned(),
                error_identifier: 401,
                error_message: format!("Invalid value for connector: {}", connector),
                error_object: None,
            })
            .into()),
        }
    }
}

/// Identifier the gateway assigned to a transaction.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub enum ResponseId {
    ConnectorTransactionId(String),
    #[default]
    NoResponseId,
}

impl ResponseId {
    pub fn get_connector_transaction_id(
        &self,
    ) -> Result<String, error_stack::Report<ConnectorError>> {
        match self {
            Self::ConnectorTransactionId(txn_id) => Ok(txn_id.to_string()),
            Self::NoResponseId => Err(ConnectorError::MissingConnectorTransactionID.into()),
        }
    }
}

/// Billing details forwarded for AVS checks.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct BillingAddress {
    pub line1: Option<Secret<String>>,
    pub line2: Option<Secret<String>>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub postal_code: Option<Secret<String>>,
    pub phone: Option<Secret<String>>,
}

#[derive(Debug, Clone)]
pub struct PaymentFlowData {
    pub payment_id: String,
    pub attempt_id: String,
    pub status: AttemptStatus,
    pub payment_method: PaymentMethod,
    pub address: Option<BillingAddress>,
    /// Merchant-side order reference sent to the gateway.
    pub connector_request_reference_id: String,
    pub connectors: Connectors,
}

#[derive(Debug, Clone)]
pub struct RefundFlowData {
    pub status: RefundStatus,
    pub refund_id: Option<String>,
    pub connectors: Connectors,
}

#[derive(Debug, Clone)]
pub struct MandateFlowData {
    pub status: MandateStatus,
    pub connectors: Connectors,
}

#[derive(Debug, Clone)]
pub struct SubscriptionFlowData {
    pub status: SubscriptionStatus,
    pub connectors: Connectors,
}

#[derive(Debug, Clone)]
pub struct PaymentsAuthorizeData {
    pub amount: MinorUnit,
    pub currency: Currency,
    pub payment_method_data: crate::payment_method_data::PaymentMethodData,
    pub capture_method: Option<CaptureMethod>,
    pub email: Option<Email>,
    pub description: Option<String>,
    pub customer_ip_address: Option<Secret<String>>,
}

#[derive(Debug, Clone)]
pub struct PaymentsCaptureData {
    pub amount_to_capture: MinorUnit,
    pub currency: Currency,
    pub connector_transaction_id: ResponseId,
}

#[derive(Debug, Clone)]
pub struct PaymentVoidData {
    pub connector_transaction_id: String,
}

#[derive(Debug, Clone)]
pub struct RefundsData {
    pub connector_transaction_id: String,
    pub refund_id: String,
    pub refund_amount: MinorUnit,
    pub currency: Currency,
    pub reason: Option<String>,
    /// Operator recorded against the refund in the gateway back office.
    pub operator: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SetupMandateRequestData {
    pub payment_method_data: crate::payment_method_data::PaymentMethodData,
    /// Merchant reference under which the card is stored.
    pub merchant_reference: String,
    pub email: Option<Email>,
}

#[derive(Debug, Clone)]
pub struct RevokeMandateRequestData {
    pub merchant_reference: String,
    pub card_reference: Secret<String>,
}

/// Payment against a previously registered card reference.
#[derive(Debug, Clone)]
pub struct RepeatPaymentData {
    pub amount: MinorUnit,
    pub currency: Currency,
    pub card_reference: Secret<String>,
    pub email: Option<Email>,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CreateSubscriptionData {
    pub merchant_reference: String,
    /// Reference of the stored subscription template to instantiate.
    pub stored_subscription_reference: String,
    /// Merchant reference of the registered card that funds the subscription.
    pub secure_card_merchant_reference: String,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
}

#[derive(Debug, Clone)]
pub struct CancelSubscriptionData {
    pub merchant_reference: String,
}

/// Manual charge raised against an active subscription.
#[derive(Debug, Clone)]
pub struct SubscriptionChargeData {
    pub subscription_reference: String,
    pub amount: MinorUnit,
    pub currency: Currency,
    pub description: Option<String>,
}

#[derive(Debug, Clone)]
pub enum PaymentsResponseData {
    TransactionResponse {
        resource_id: ResponseId,
        approval_code: Option<String>,
        avs_response: Option<String>,
        cvv_response: Option<String>,
        connector_response_reference_id: Option<String>,
        raw_connector_response: Option<Secret<String>>,
        status_code: u16,
    },
}

#[derive(Debug, Clone)]
pub struct RefundsResponseData {
    pub connector_refund_id: String,
    pub refund_status: RefundStatus,
    pub raw_connector_response: Option<Secret<String>>,
    pub status_code: u16,
}

#[derive(Debug, Clone)]
pub struct MandateResponseData {
    /// Gateway-issued reference standing in for the card number.
    pub mandate_reference: Option<Secret<String>>,
    pub merchant_reference: Option<String>,
    pub mandate_status: MandateStatus,
    pub raw_connector_response: Option<Secret<String>>,
    pub status_code: u16,
}

#[derive(Debug, Clone)]
pub struct SubscriptionResponseData {
    pub merchant_reference: Option<String>,
    pub subscription_status: SubscriptionStatus,
    pub raw_connector_response: Option<Secret<String>>,
    pub status_code: u16,
}
