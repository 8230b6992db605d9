use common_enums::{
    AttemptStatus, CaptureMethod, Currency, MandateStatus, RefundStatus, SubscriptionStatus,
};
use common_utils::{
    consts::{NO_ERROR_CODE, NO_ERROR_MESSAGE},
    crypto::{self, SignMessage},
    date_time,
    pii::Email,
    types::StringMajorUnit,
};
use domain_types::{
    connector_flow::{
        Authorize, CancelSubscription, Capture, CreateSubscription, RepeatPayment, RevokeMandate,
        SetupMandate, SubscriptionCharge, Void,
    },
    connector_types::{
        CancelSubscriptionData, CreateSubscriptionData, MandateFlowData, MandateResponseData,
        PaymentFlowData, PaymentVoidData, PaymentsAuthorizeData, PaymentsCaptureData,
        PaymentsResponseData, RefundFlowData, RefundsData, RefundsResponseData, RepeatPaymentData,
        ResponseId, RevokeMandateRequestData, SetupMandateRequestData, SubscriptionChargeData,
        SubscriptionFlowData, SubscriptionResponseData,
    },
    errors::ConnectorError,
    payment_method_data::{Card, CardType, PaymentMethodData},
    router_data::{ConnectorAuthType, ErrorResponse},
    router_data_v2::RouterDataV2,
    utils::missing_field_err,
};
use error_stack::ResultExt;
use hyperswitch_masking::{PeekInterface, Secret};
use serde::{Deserialize, Serialize};

use super::WorldnetRouterData;
use crate::types::ResponseRouterData;

pub type Error = error_stack::Report<ConnectorError>;

// Fixed terminal parameters for internet-originated transactions.
const TERMINAL_TYPE: &str = "2";
const TRANSACTION_TYPE: &str = "7";

const DEFAULT_REFUND_OPERATOR: &str = "merchant-api";
const DEFAULT_REFUND_REASON: &str = "Refund";

pub struct WorldnetAuthType {
    pub terminal_id: Secret<String>,
    pub shared_secret: Secret<String>,
}

impl TryFrom<&ConnectorAuthType> for WorldnetAuthType {
    type Error = Error;

    fn try_from(auth_type: &ConnectorAuthType) -> Result<Self, Self::Error> {
        match auth_type {
            ConnectorAuthType::SignatureKey {
                api_key,
                api_secret,
                ..
            } => Ok(Self {
                terminal_id: api_key.clone(),
                shared_secret: api_secret.clone(),
            }),
            ConnectorAuthType::BodyKey { api_key, key1 } => Ok(Self {
                terminal_id: api_key.clone(),
                shared_secret: key1.clone(),
            }),
            _ => Err(ConnectorError::FailedToObtainAuthType.into()),
        }
    }
}

/// Lowercase-hex MD5 over the concatenated fields with the terminal's shared
/// secret appended.
pub(crate) fn md5_hash(fields: &[&str], shared_secret: &Secret<String>) -> Result<String, Error> {
    let message = fields.concat();
    let digest = crypto::Md5
        .sign_message(shared_secret.peek().as_bytes(), message.as_bytes())
        .change_context(ConnectorError::RequestEncodingFailed)?;
    Ok(crypto::hex_digest(&digest))
}

fn gateway_timestamp() -> Result<String, Error> {
    date_time::format_timestamp(date_time::now())
        .change_context(ConnectorError::DateFormattingFailed)
}

// ------------------------------------------------------------------
// Requests
// ------------------------------------------------------------------

/// Card payment. The root element decides whether the gateway settles
/// immediately (`PAYMENT`) or holds the funds (`PREAUTH`).
#[derive(Debug, Serialize)]
pub enum WorldnetPaymentRequest {
    #[serde(rename = "PAYMENT")]
    Payment(PaymentTransaction),
    #[serde(rename = "PREAUTH")]
    Preauth(PaymentTransaction),
}

/// Payment against a stored card reference, always a `PAYMENT` with
/// `CARDTYPE` set to `SECURECARD`.
pub type WorldnetRepeatPaymentRequest = WorldnetPaymentRequest;

#[derive(Debug, Serialize)]
pub struct PaymentTransaction {
    #[serde(rename = "ORDERID")]
    pub order_id: String,
    #[serde(rename = "TERMINALID")]
    pub terminal_id: Secret<String>,
    #[serde(rename = "AMOUNT")]
    pub amount: StringMajorUnit,
    #[serde(rename = "DATETIME")]
    pub date_time: String,
    #[serde(rename = "CARDNUMBER")]
    pub card_number: Secret<String>,
    #[serde(rename = "CARDTYPE")]
    pub card_type: String,
    #[serde(rename = "CARDEXPIRY", skip_serializing_if = "Option::is_none")]
    pub card_expiry: Option<Secret<String>>,
    #[serde(rename = "CARDHOLDERNAME", skip_serializing_if = "Option::is_none")]
    pub card_holder_name: Option<Secret<String>>,
    #[serde(rename = "HASH")]
    pub hash: String,
    #[serde(rename = "CURRENCY")]
    pub currency: Currency,
    #[serde(rename = "TERMINALTYPE")]
    pub terminal_type: String,
    #[serde(rename = "TRANSACTIONTYPE")]
    pub transaction_type: String,
    #[serde(rename = "EMAIL", skip_serializing_if = "Option::is_none")]
    pub email: Option<Email>,
    #[serde(rename = "CVV", skip_serializing_if = "Option::is_none")]
    pub cvv: Option<Secret<String>>,
    #[serde(rename = "ADDRESS1", skip_serializing_if = "Option::is_none")]
    pub address1: Option<Secret<String>>,
    #[serde(rename = "ADDRESS2", skip_serializing_if = "Option::is_none")]
    pub address2: Option<Secret<String>>,
    #[serde(rename = "POSTCODE", skip_serializing_if = "Option::is_none")]
    pub post_code: Option<Secret<String>>,
    #[serde(rename = "CITY", skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(rename = "PHONE", skip_serializing_if = "Option::is_none")]
    pub phone: Option<Secret<String>>,
    #[serde(rename = "DESCRIPTION", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "IPADDRESS", skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<Secret<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename = "PREAUTHCOMPLETION")]
pub struct WorldnetCaptureRequest {
    #[serde(rename = "UNIQUEREF")]
    pub unique_ref: String,
    #[serde(rename = "TERMINALID")]
    pub terminal_id: Secret<String>,
    #[serde(rename = "AMOUNT")]
    pub amount: StringMajorUnit,
    #[serde(rename = "DATETIME")]
    pub date_time: String,
    #[serde(rename = "HASH")]
    pub hash: String,
}

#[derive(Debug, Serialize)]
#[serde(rename = "VOID")]
pub struct WorldnetVoidRequest {
    #[serde(rename = "UNIQUEREF")]
    pub unique_ref: String,
    #[serde(rename = "TERMINALID")]
    pub terminal_id: Secret<String>,
    #[serde(rename = "DATETIME")]
    pub date_time: String,
    #[serde(rename = "HASH")]
    pub hash: String,
}

#[derive(Debug, Serialize)]
#[serde(rename = "REFUND")]
pub struct WorldnetRefundRequest {
    #[serde(rename = "UNIQUEREF")]
    pub unique_ref: String,
    #[serde(rename = "TERMINALID")]
    pub terminal_id: Secret<String>,
    #[serde(rename = "AMOUNT")]
    pub amount: StringMajorUnit,
    #[serde(rename = "DATETIME")]
    pub date_time: String,
    #[serde(rename = "HASH")]
    pub hash: String,
    #[serde(rename = "OPERATOR")]
    pub operator: String,
    #[serde(rename = "REASON")]
    pub reason: String,
}

#[derive(Debug, Serialize)]
#[serde(rename = "SECURECARDREGISTRATION")]
pub struct WorldnetCardRegistrationRequest {
    #[serde(rename = "MERCHANTREF")]
    pub merchant_ref: String,
    #[serde(rename = "TERMINALID")]
    pub terminal_id: Secret<String>,
    #[serde(rename = "DATETIME")]
    pub date_time: String,
    #[serde(rename = "CARDNUMBER")]
    pub card_number: Secret<String>,
    #[serde(rename = "CARDEXPIRY")]
    pub card_expiry: Secret<String>,
    #[serde(rename = "CARDTYPE")]
    pub card_type: String,
    #[serde(rename = "CARDHOLDERNAME")]
    pub card_holder_name: Secret<String>,
    #[serde(rename = "HASH")]
    pub hash: String,
    #[serde(rename = "CVV", skip_serializing_if = "Option::is_none")]
    pub cvv: Option<Secret<String>>,
}

#[derive(Debug, Serialize)]
#[serde(rename = "SECURECARDREMOVAL")]
pub struct WorldnetCardRemovalRequest {
    #[serde(rename = "MERCHANTREF")]
    pub merchant_ref: String,
    #[serde(rename = "CARDREFERENCE")]
    pub card_reference: Secret<String>,
    #[serde(rename = "TERMINALID")]
    pub terminal_id: Secret<String>,
    #[serde(rename = "DATETIME")]
    pub date_time: String,
    #[serde(rename = "HASH")]
    pub hash: String,
}

#[derive(Debug, Serialize)]
#[serde(rename = "ADDSUBSCRIPTION")]
pub struct WorldnetAddSubscriptionRequest {
    #[serde(rename = "MERCHANTREF")]
    pub merchant_ref: String,
    #[serde(rename = "TERMINALID")]
    pub terminal_id: Secret<String>,
    #[serde(rename = "STOREDSUBSCRIPTIONREF")]
    pub stored_subscription_ref: String,
    #[serde(rename = "SECURECARDMERCHANTREF")]
    pub secure_card_merchant_ref: String,
    #[serde(rename = "DATETIME")]
    pub date_time: String,
    #[serde(rename = "STARTDATE")]
    pub start_date: String,
    #[serde(rename = "ENDDATE", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(rename = "HASH")]
    pub hash: String,
}

#[derive(Debug, Serialize)]
#[serde(rename = "DELETESUBSCRIPTION")]
pub struct WorldnetDeleteSubscriptionRequest {
    #[serde(rename = "MERCHANTREF")]
    pub merchant_ref: String,
    #[serde(rename = "TERMINALID")]
    pub terminal_id: Secret<String>,
    #[serde(rename = "DATETIME")]
    pub date_time: String,
    #[serde(rename = "HASH")]
    pub hash: String,
}

#[derive(Debug, Serialize)]
#[serde(rename = "SUBSCRIPTIONPAYMENT")]
pub struct WorldnetSubscriptionPaymentRequest {
    #[serde(rename = "ORDERID")]
    pub order_id: String,
    #[serde(rename = "TERMINALID")]
    pub terminal_id: Secret<String>,
    #[serde(rename = "AMOUNT")]
    pub amount: StringMajorUnit,
    #[serde(rename = "SUBSCRIPTIONREF")]
    pub subscription_ref: String,
    #[serde(rename = "DATETIME")]
    pub date_time: String,
    #[serde(rename = "HASH")]
    pub hash: String,
    #[serde(rename = "CURRENCY")]
    pub currency: Currency,
    #[serde(rename = "DESCRIPTION", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ------------------------------------------------------------------
// Request conversions
// ------------------------------------------------------------------

fn get_card(payment_method_data: &PaymentMethodData) -> Result<&Card, Error> {
    match payment_method_data {
        PaymentMethodData::Card(card) => Ok(card),
        PaymentMethodData::CardReference(_) => Err(ConnectorError::NotSupported {
            message: "stored card reference on a fresh authorization".to_string(),
            connector: "worldnet",
        }
        .into()),
    }
}

impl
    TryFrom<
        WorldnetRouterData<
            RouterDataV2<Authorize, PaymentFlowData, PaymentsAuthorizeData, PaymentsResponseData>,
        >,
    > for WorldnetPaymentRequest
{
    type Error = Error;

    fn try_from(
        item: WorldnetRouterData<
            RouterDataV2<Authorize, PaymentFlowData, PaymentsAuthorizeData, PaymentsResponseData>,
        >,
    ) -> Result<Self, Self::Error> {
        let router_data = item.router_data;
        let auth = WorldnetAuthType::try_from(&router_data.connector_auth_type)?;
        let request = &router_data.request;
        let card = get_card(&request.payment_method_data)?;

        let order_id = router_data
            .resource_common_data
            .connector_request_reference_id
            .clone();
        let amount = item
            .connector
            .amount_converter
            .convert(request.amount, request.currency)
            .change_context(ConnectorError::AmountConversionFailed)?;
        let date_time = gateway_timestamp()?;
        let hash = md5_hash(
            &[
                auth.terminal_id.peek(),
                &order_id,
                amount.get_amount_as_string(),
                &date_time,
            ],
            &auth.shared_secret,
        )?;

        let card_type = card
            .card_type
            .ok_or_else(missing_field_err("payment_method_data.card.card_type"))?;
        let address = router_data.resource_common_data.address.clone();

        let transaction = PaymentTransaction {
            order_id,
            terminal_id: auth.terminal_id,
            amount,
            date_time,
            card_number: Secret::new(card.card_number.get_card_no()),
            card_type: card_type.to_string(),
            card_expiry: Some(card.get_expiry_date_as_mmyy()?),
            card_holder_name: card.card_holder_name.clone(),
            hash,
            currency: request.currency,
            terminal_type: TERMINAL_TYPE.to_string(),
            transaction_type: TRANSACTION_TYPE.to_string(),
            email: request.email.clone(),
            cvv: Some(card.card_cvc.clone()),
            address1: address.as_ref().and_then(|a| a.line1.clone()),
            address2: address.as_ref().and_then(|a| a.line2.clone()),
            post_code: address.as_ref().and_then(|a| a.postal_code.clone()),
            city: address.as_ref().and_then(|a| a.city.clone()),
            phone: address.as_ref().and_then(|a| a.phone.clone()),
            description: request.description.clone(),
            ip_address: request.customer_ip_address.clone(),
        };

        Ok(match request.capture_method.unwrap_or_default() {
            CaptureMethod::Manual => Self::Preauth(transaction),
            CaptureMethod::Automatic => Self::Payment(transaction),
        })
    }
}

impl
    TryFrom<
        WorldnetRouterData<
            RouterDataV2<RepeatPayment, PaymentFlowData, RepeatPaymentData, PaymentsResponseData>,
        >,
    > for WorldnetRepeatPaymentRequest
{
    type Error = Error;

    fn try_from(
        item: WorldnetRouterData<
            RouterDataV2<RepeatPayment, PaymentFlowData, RepeatPaymentData, PaymentsResponseData>,
        >,
    ) -> Result<Self, Self::Error> {
        let router_data = item.router_data;
        let auth = WorldnetAuthType::try_from(&router_data.connector_auth_type)?;
        let request = &router_data.request;

        let order_id = router_data
            .resource_common_data
            .connector_request_reference_id
            .clone();
        let amount = item
            .connector
            .amount_converter
            .convert(request.amount, request.currency)
            .change_context(ConnectorError::AmountConversionFailed)?;
        let date_time = gateway_timestamp()?;
        let hash = md5_hash(
            &[
                auth.terminal_id.peek(),
                &order_id,
                amount.get_amount_as_string(),
                &date_time,
            ],
            &auth.shared_secret,
        )?;

        Ok(Self::Payment(PaymentTransaction {
            order_id,
            terminal_id: auth.terminal_id,
            amount,
            date_time,
            card_number: request.card_reference.clone(),
            card_type: CardType::Securecard.to_string(),
            card_expiry: None,
            card_holder_name: None,
            hash,
            currency: request.currency,
            terminal_type: TERMINAL_TYPE.to_string(),
            transaction_type: TRANSACTION_TYPE.to_string(),
            email: request.email.clone(),
            cvv: None,
            address1: None,
            address2: None,
            post_code: None,
            city: None,
            phone: None,
            description: request.description.clone(),
            ip_address: None,
        }))
    }
}

impl
    TryFrom<
        WorldnetRouterData<
            RouterDataV2<Capture, PaymentFlowData, PaymentsCaptureData, PaymentsResponseData>,
        >,
    > for WorldnetCaptureRequest
{
    type Error = Error;

    fn try_from(
        item: WorldnetRouterData<
            RouterDataV2<Capture, PaymentFlowData, PaymentsCaptureData, PaymentsResponseData>,
        >,
    ) -> Result<Self, Self::Error> {
        let router_data = item.router_data;
        let auth = WorldnetAuthType::try_from(&router_data.connector_auth_type)?;
        let request = &router_data.request;

        let unique_ref = request.connector_transaction_id.get_connector_transaction_id()?;
        let amount = item
            .connector
            .amount_converter
            .convert(request.amount_to_capture, request.currency)
            .change_context(ConnectorError::AmountConversionFailed)?;
        let date_time = gateway_timestamp()?;
        let hash = md5_hash(
            &[
                auth.terminal_id.peek(),
                &unique_ref,
                amount.get_amount_as_string(),
                &date_time,
            ],
            &auth.shared_secret,
        )?;

        Ok(Self {
            unique_ref,
            terminal_id: auth.terminal_id,
            amount,
            date_time,
            hash,
        })
    }
}

impl
    TryFrom<
        WorldnetRouterData<
            RouterDataV2<Void, PaymentFlowData, PaymentVoidData, PaymentsResponseData>,
        >,
    > for WorldnetVoidRequest
{
    type Error = Error;

    fn try_from(
        item: WorldnetRouterData<
            RouterDataV2<Void, PaymentFlowData, PaymentVoidData, PaymentsResponseData>,
        >,
    ) -> Result<Self, Self::Error> {
        let router_data = item.router_data;
        let auth = WorldnetAuthType::try_from(&router_data.connector_auth_type)?;
        let unique_ref = router_data.request.connector_transaction_id.clone();
        let date_time = gateway_timestamp()?;
        let hash = md5_hash(
            &[auth.terminal_id.peek(), &unique_ref, &date_time],
            &auth.shared_secret,
        )?;

        Ok(Self {
            unique_ref,
            terminal_id: auth.terminal_id,
            date_time,
            hash,
        })
    }
}

impl
    TryFrom<
        WorldnetRouterData<
            RouterDataV2<
                domain_types::connector_flow::Refund,
                RefundFlowData,
                RefundsData,
                RefundsResponseData,
            >,
        >,
    > for WorldnetRefundRequest
{
    type Error = Error;

    fn try_from(
        item: WorldnetRouterData<
            RouterDataV2<
                domain_types::connector_flow::Refund,
                RefundFlowData,
                RefundsData,
                RefundsResponseData,
            >,
        >,
    ) -> Result<Self, Self::Error> {
        let router_data = item.router_data;
        let auth = WorldnetAuthType::try_from(&router_data.connector_auth_type)?;
        let request = &router_data.request;

        let unique_ref = request.connector_transaction_id.clone();
        let amount = item
            .connector
            .amount_converter
            .convert(request.refund_amount, request.currency)
            .change_context(ConnectorError::AmountConversionFailed)?;
        let date_time = gateway_timestamp()?;
        let hash = md5_hash(
            &[
                auth.terminal_id.peek(),
                &unique_ref,
                amount.get_amount_as_string(),
                &date_time,
            ],
            &auth.shared_secret,
        )?;

        Ok(Self {
            unique_ref,
            terminal_id: auth.terminal_id,
            amount,
            date_time,
            hash,
            operator: request
                .operator
                .clone()
                .unwrap_or_else(|| DEFAULT_REFUND_OPERATOR.to_string()),
            reason: request
                .reason
                .clone()
                .unwrap_or_else(|| DEFAULT_REFUND_REASON.to_string()),
        })
    }
}

impl
    TryFrom<
        WorldnetRouterData<
            RouterDataV2<SetupMandate, MandateFlowData, SetupMandateRequestData, MandateResponseData>,
        >,
    > for WorldnetCardRegistrationRequest
{
    type Error = Error;

    fn try_from(
        item: WorldnetRouterData<
            RouterDataV2<
                SetupMandate,
                MandateFlowData,
                SetupMandateRequestData,
                MandateResponseData,
            >,
        >,
    ) -> Result<Self, Self::Error> {
        let router_data = item.router_data;
        let auth = WorldnetAuthType::try_from(&router_data.connector_auth_type)?;
        let request = &router_data.request;
        let card = get_card(&request.payment_method_data)?;

        let merchant_ref = request.merchant_reference.clone();
        let date_time = gateway_timestamp()?;
        let card_number = card.card_number.get_card_no();
        let card_expiry = card.get_expiry_date_as_mmyy()?;
        let card_type = card
            .card_type
            .ok_or_else(missing_field_err("payment_method_data.card.card_type"))?;
        let card_holder_name = card
            .card_holder_name
            .clone()
            .ok_or_else(missing_field_err("payment_method_data.card.card_holder_name"))?;

        let hash = md5_hash(
            &[
                auth.terminal_id.peek(),
                &merchant_ref,
                &date_time,
                &card_number,
                card_expiry.peek(),
                &card_type.to_string(),
                card_holder_name.peek(),
            ],
            &auth.shared_secret,
        )?;

        Ok(Self {
            merchant_ref,
            terminal_id: auth.terminal_id,
            date_time,
            card_number: Secret::new(card_number),
            card_expiry,
            card_type: card_type.to_string(),
            card_holder_name,
            hash,
            cvv: Some(card.card_cvc.clone()),
        })
    }
}

impl
    TryFrom<
        WorldnetRouterData<
            RouterDataV2<
                RevokeMandate,
                MandateFlowData,
                RevokeMandateRequestData,
                MandateResponseData,
            >,
        >,
    > for WorldnetCardRemovalRequest
{
    type Error = Error;

    fn try_from(
        item: WorldnetRouterData<
            RouterDataV2<
                RevokeMandate,
                MandateFlowData,
                RevokeMandateRequestData,
                MandateResponseData,
            >,
        >,
    ) -> Result<Self, Self::Error> {
        let router_data = item.router_data;
        let auth = WorldnetAuthType::try_from(&router_data.connector_auth_type)?;
        let request = &router_data.request;

        let merchant_ref = request.merchant_reference.clone();
        let date_time = gateway_timestamp()?;
        let hash = md5_hash(
            &[
                auth.terminal_id.peek(),
                &merchant_ref,
                &date_time,
                request.card_reference.peek(),
            ],
            &auth.shared_secret,
        )?;

        Ok(Self {
            merchant_ref,
            card_reference: request.card_reference.clone(),
            terminal_id: auth.terminal_id,
            date_time,
            hash,
        })
    }
}

impl
    TryFrom<
        WorldnetRouterData<
            RouterDataV2<
                CreateSubscription,
                SubscriptionFlowData,
                CreateSubscriptionData,
                SubscriptionResponseData,
            >,
        >,
    > for WorldnetAddSubscriptionRequest
{
    type Error = Error;

    fn try_from(
        item: WorldnetRouterData<
            RouterDataV2<
                CreateSubscription,
                SubscriptionFlowData,
                CreateSubscriptionData,
                SubscriptionResponseData,
            >,
        >,
    ) -> Result<Self, Self::Error> {
        let router_data = item.router_data;
        let auth = WorldnetAuthType::try_from(&router_data.connector_auth_type)?;
        let request = &router_data.request;

        let merchant_ref = request.merchant_reference.clone();
        let date_time = gateway_timestamp()?;
        let start_date = match request.start_date {
            Some(date) => date_time::format_date_value(date)
                .change_context(ConnectorError::DateFormattingFailed)?,
            None => date_time::format_date(date_time::now())
                .change_context(ConnectorError::DateFormattingFailed)?,
        };
        let end_date = request
            .end_date
            .map(date_time::format_date_value)
            .transpose()
            .change_context(ConnectorError::DateFormattingFailed)?;

        let hash = md5_hash(
            &[
                auth.terminal_id.peek(),
                &merchant_ref,
                &request.secure_card_merchant_reference,
                &date_time,
                &start_date,
            ],
            &auth.shared_secret,
        )?;

        Ok(Self {
            merchant_ref,
            terminal_id: auth.terminal_id,
            stored_subscription_ref: request.stored_subscription_reference.clone(),
            secure_card_merchant_ref: request.secure_card_merchant_reference.clone(),
            date_time,
            start_date,
            end_date,
            hash,
        })
    }
}

impl
    TryFrom<
        WorldnetRouterData<
            RouterDataV2<
                CancelSubscription,
                SubscriptionFlowData,
                CancelSubscriptionData,
                SubscriptionResponseData,
            >,
        >,
    > for WorldnetDeleteSubscriptionRequest
{
    type Error = Error;

    fn try_from(
        item: WorldnetRouterData<
            RouterDataV2<
                CancelSubscription,
                SubscriptionFlowData,
                CancelSubscriptionData,
                SubscriptionResponseData,
            >,
        >,
    ) -> Result<Self, Self::Error> {
        let router_data = item.router_data;
        let auth = WorldnetAuthType::try_from(&router_data.connector_auth_type)?;
        let merchant_ref = router_data.request.merchant_reference.clone();
        let date_time = gateway_timestamp()?;
        let hash = md5_hash(
            &[auth.terminal_id.peek(), &merchant_ref, &date_time],
            &auth.shared_secret,
        )?;

        Ok(Self {
            merchant_ref,
            terminal_id: auth.terminal_id,
            date_time,
            hash,
        })
    }
}

impl
    TryFrom<
        WorldnetRouterData<
            RouterDataV2<
                SubscriptionCharge,
                PaymentFlowData,
                SubscriptionChargeData,
                PaymentsResponseData,
            >,
        >,
    > for WorldnetSubscriptionPaymentRequest
{
    type Error = Error;

    fn try_from(
        item: WorldnetRouterData<
            RouterDataV2<
                SubscriptionCharge,
                PaymentFlowData,
                SubscriptionChargeData,
                PaymentsResponseData,
            >,
        >,
    ) -> Result<Self, Self::Error> {
        let router_data = item.router_data;
        let auth = WorldnetAuthType::try_from(&router_data.connector_auth_type)?;
        let request = &router_data.request;

        let order_id = router_data
            .resource_common_data
            .connector_request_reference_id
            .clone();
        let amount = item
            .connector
            .amount_converter
            .convert(request.amount, request.currency)
            .change_context(ConnectorError::AmountConversionFailed)?;
        let date_time = gateway_timestamp()?;
        let hash = md5_hash(
            &[
                auth.terminal_id.peek(),
                &order_id,
                amount.get_amount_as_string(),
                &request.subscription_reference,
                &date_time,
            ],
            &auth.shared_secret,
        )?;

        Ok(Self {
            order_id,
            terminal_id: auth.terminal_id,
            amount,
            subscription_ref: request.subscription_reference.clone(),
            date_time,
            hash,
            currency: request.currency,
            description: request.description.clone(),
        })
    }
}

// ------------------------------------------------------------------
// Responses
// ------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorldnetResponseCode {
    Approved,
    Declined,
    Referral,
    Unknown,
}

impl From<&str> for WorldnetResponseCode {
    fn from(code: &str) -> Self {
        match code {
            "A" => Self::Approved,
            "D" => Self::Declined,
            "R" => Self::Referral,
            _ => Self::Unknown,
        }
    }
}

/// Payment-family response document. Also parses the gateway's top-level
/// `<ERROR>` document, every field is optional and the presence of
/// `RESPONSECODE` decides which shape arrived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldnetPaymentsResponse {
    #[serde(rename = "UNIQUEREF")]
    pub unique_ref: Option<String>,
    #[serde(rename = "RESPONSECODE")]
    pub response_code: Option<String>,
    #[serde(rename = "RESPONSETEXT")]
    pub response_text: Option<String>,
    #[serde(rename = "APPROVALCODE")]
    pub approval_code: Option<String>,
    #[serde(rename = "DATETIME")]
    pub date_time: Option<String>,
    #[serde(rename = "AVSRESPONSE")]
    pub avs_response: Option<String>,
    #[serde(rename = "CVVRESPONSE")]
    pub cvv_response: Option<String>,
    #[serde(rename = "HASH")]
    pub hash: Option<String>,
    #[serde(rename = "ERRORSTRING")]
    pub error_string: Option<String>,
    #[serde(rename = "ERRORCODE")]
    pub error_code: Option<String>,
}

pub type WorldnetCaptureResponse = WorldnetPaymentsResponse;
pub type WorldnetVoidResponse = WorldnetPaymentsResponse;
pub type WorldnetRefundResponse = WorldnetPaymentsResponse;
pub type WorldnetRepeatPaymentResponse = WorldnetPaymentsResponse;
pub type WorldnetSubscriptionPaymentResponse = WorldnetPaymentsResponse;

/// SecureCard registration/removal response document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldnetSecureCardResponse {
    #[serde(rename = "MERCHANTREF")]
    pub merchant_ref: Option<String>,
    #[serde(rename = "CARDREFERENCE")]
    pub card_reference: Option<String>,
    #[serde(rename = "RESPONSECODE")]
    pub response_code: Option<String>,
    #[serde(rename = "RESPONSETEXT")]
    pub response_text: Option<String>,
    #[serde(rename = "DATETIME")]
    pub date_time: Option<String>,
    #[serde(rename = "HASH")]
    pub hash: Option<String>,
    #[serde(rename = "ERRORSTRING")]
    pub error_string: Option<String>,
    #[serde(rename = "ERRORCODE")]
    pub error_code: Option<String>,
}

pub type WorldnetCardRegistrationResponse = WorldnetSecureCardResponse;
pub type WorldnetCardRemovalResponse = WorldnetSecureCardResponse;

/// Subscription add/delete response document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldnetSubscriptionResponse {
    #[serde(rename = "MERCHANTREF")]
    pub merchant_ref: Option<String>,
    #[serde(rename = "RESPONSECODE")]
    pub response_code: Option<String>,
    #[serde(rename = "RESPONSETEXT")]
    pub response_text: Option<String>,
    #[serde(rename = "DATETIME")]
    pub date_time: Option<String>,
    #[serde(rename = "HASH")]
    pub hash: Option<String>,
    #[serde(rename = "ERRORSTRING")]
    pub error_string: Option<String>,
    #[serde(rename = "ERRORCODE")]
    pub error_code: Option<String>,
}

pub type WorldnetAddSubscriptionResponse = WorldnetSubscriptionResponse;
pub type WorldnetDeleteSubscriptionResponse = WorldnetSubscriptionResponse;

// A document carrying transaction fields must also carry its HASH; the bare
// error document the gateway emits before processing is the only unsigned
// shape.
impl WorldnetPaymentsResponse {
    pub(crate) fn signature_bytes(&self) -> Result<Vec<u8>, Error> {
        match &self.hash {
            Some(hash) => Ok(hash.clone().into_bytes()),
            None if self.response_code.is_none() && self.unique_ref.is_none() => Ok(Vec::new()),
            None => Err(ConnectorError::ResponseHashMismatch.into()),
        }
    }
}

impl WorldnetSecureCardResponse {
    pub(crate) fn signature_bytes(&self) -> Result<Vec<u8>, Error> {
        match &self.hash {
            Some(hash) => Ok(hash.clone().into_bytes()),
            None if self.response_code.is_none() && self.card_reference.is_none() => {
                Ok(Vec::new())
            }
            None => Err(ConnectorError::ResponseHashMismatch.into()),
        }
    }
}

impl WorldnetSubscriptionResponse {
    pub(crate) fn signature_bytes(&self) -> Result<Vec<u8>, Error> {
        match &self.hash {
            Some(hash) => Ok(hash.clone().into_bytes()),
            None if self.response_code.is_none() && self.merchant_ref.is_none() => Ok(Vec::new()),
            None => Err(ConnectorError::ResponseHashMismatch.into()),
        }
    }
}

/// Top-level `<ERROR>` document the gateway answers with when a request never
/// reached transaction processing. Unsigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldnetErrorResponse {
    #[serde(rename = "ERRORCODE")]
    pub error_code: Option<String>,
    #[serde(rename = "ERRORSTRING")]
    pub error_string: Option<String>,
}

// ------------------------------------------------------------------
// Response-hash messages, shared with source verification
// ------------------------------------------------------------------

pub(crate) fn payment_response_hash_message(
    terminal_id: &str,
    amount: Option<&str>,
    response: &WorldnetPaymentsResponse,
) -> String {
    [
        terminal_id,
        response.unique_ref.as_deref().unwrap_or_default(),
        amount.unwrap_or_default(),
        response.date_time.as_deref().unwrap_or_default(),
        response.response_code.as_deref().unwrap_or_default(),
        response.response_text.as_deref().unwrap_or_default(),
    ]
    .concat()
}

pub(crate) fn secure_card_response_hash_message(
    terminal_id: &str,
    response: &WorldnetSecureCardResponse,
) -> String {
    [
        terminal_id,
        response.response_code.as_deref().unwrap_or_default(),
        response.response_text.as_deref().unwrap_or_default(),
        response.merchant_ref.as_deref().unwrap_or_default(),
        response.card_reference.as_deref().unwrap_or_default(),
        response.date_time.as_deref().unwrap_or_default(),
    ]
    .concat()
}

pub(crate) fn subscription_response_hash_message(
    terminal_id: &str,
    response: &WorldnetSubscriptionResponse,
) -> String {
    [
        terminal_id,
        response.response_code.as_deref().unwrap_or_default(),
        response.response_text.as_deref().unwrap_or_default(),
        response.merchant_ref.as_deref().unwrap_or_default(),
        response.date_time.as_deref().unwrap_or_default(),
    ]
    .concat()
}

// ------------------------------------------------------------------
// Response conversions
// ------------------------------------------------------------------

fn raw_response<T: Serialize>(response: &T) -> Option<Secret<String>> {
    quick_xml::se::to_string(response).ok().map(Secret::new)
}

fn gateway_error_response(
    error: String,
    error_code: Option<String>,
    status_code: u16,
    raw: Option<Secret<String>>,
) -> ErrorResponse {
    ErrorResponse {
        code: error_code.unwrap_or_else(|| NO_ERROR_CODE.to_string()),
        message: error.clone(),
        reason: Some(error),
        status_code,
        attempt_status: Some(AttemptStatus::Failure),
        connector_transaction_id: None,
        raw_connector_response: raw.map(|secret| secret.peek().clone()),
    }
}

fn declined_error_response(
    response: &WorldnetPaymentsResponse,
    status_code: u16,
) -> ErrorResponse {
    ErrorResponse {
        code: response
            .response_code
            .clone()
            .unwrap_or_else(|| NO_ERROR_CODE.to_string()),
        message: response
            .response_text
            .clone()
            .unwrap_or_else(|| NO_ERROR_MESSAGE.to_string()),
        reason: response.response_text.clone(),
        status_code,
        attempt_status: Some(AttemptStatus::Failure),
        connector_transaction_id: response.unique_ref.clone(),
        raw_connector_response: raw_response(response).map(|secret| secret.peek().clone()),
    }
}

fn payment_transaction_response(
    response: &WorldnetPaymentsResponse,
    status_code: u16,
) -> Result<PaymentsResponseData, Error> {
    let unique_ref = response
        .unique_ref
        .clone()
        .ok_or(ConnectorError::MissingConnectorTransactionID)?;
    Ok(PaymentsResponseData::TransactionResponse {
        resource_id: ResponseId::ConnectorTransactionId(unique_ref.clone()),
        approval_code: response.approval_code.clone(),
        avs_response: response.avs_response.clone(),
        cvv_response: response.cvv_response.clone(),
        connector_response_reference_id: Some(unique_ref),
        raw_connector_response: raw_response(response),
        status_code,
    })
}

/// Success status for an approved payment-family transaction, by flow.
fn approved_payment_status(capture_method: Option<CaptureMethod>) -> AttemptStatus {
    match capture_method.unwrap_or_default() {
        CaptureMethod::Manual => AttemptStatus::Authorized,
        CaptureMethod::Automatic => AttemptStatus::Charged,
    }
}

macro_rules! impl_payment_family_response {
    ($flow: ty, $request: ty, approved_status: |$rd: ident| $approved: expr) => {
        impl
            TryFrom<
                ResponseRouterData<
                    WorldnetPaymentsResponse,
                    RouterDataV2<$flow, PaymentFlowData, $request, PaymentsResponseData>,
                >,
            > for RouterDataV2<$flow, PaymentFlowData, $request, PaymentsResponseData>
        {
            type Error = Error;

            fn try_from(
                item: ResponseRouterData<
                    WorldnetPaymentsResponse,
                    RouterDataV2<$flow, PaymentFlowData, $request, PaymentsResponseData>,
                >,
            ) -> Result<Self, Self::Error> {
                let ResponseRouterData {
                    response,
                    router_data,
                    http_code,
                } = item;
                let mut router_data = router_data;

                if let Some(error) = response.error_string.clone() {
                    router_data.resource_common_data.status = AttemptStatus::Failure;
                    router_data.response = Err(gateway_error_response(
                        error,
                        response.error_code.clone(),
                        http_code,
                        raw_response(&response),
                    ));
                    return Ok(router_data);
                }

                let code = response
                    .response_code
                    .as_deref()
                    .ok_or(ConnectorError::ResponseDeserializationFailed)?;
                match WorldnetResponseCode::from(code) {
                    WorldnetResponseCode::Approved => {
                        let $rd = &router_data;
                        router_data.resource_common_data.status = $approved;
                        router_data.response =
                            Ok(payment_transaction_response(&response, http_code)?);
                    }
                    _ => {
                        router_data.resource_common_data.status = AttemptStatus::Failure;
                        router_data.response = Err(declined_error_response(&response, http_code));
                    }
                }
                Ok(router_data)
            }
        }
    };
}

impl_payment_family_response!(
    Authorize,
    PaymentsAuthorizeData,
    approved_status: |rd| approved_payment_status(rd.request.capture_method)
);
impl_payment_family_response!(
    Capture,
    PaymentsCaptureData,
    approved_status: |_rd| AttemptStatus::Charged
);
impl_payment_family_response!(
    Void,
    PaymentVoidData,
    approved_status: |_rd| AttemptStatus::Voided
);
impl_payment_family_response!(
    RepeatPayment,
    RepeatPaymentData,
    approved_status: |_rd| AttemptStatus::Charged
);
impl_payment_family_response!(
    SubscriptionCharge,
    SubscriptionChargeData,
    approved_status: |_rd| AttemptStatus::Charged
);

impl
    TryFrom<
        ResponseRouterData<
            WorldnetRefundResponse,
            RouterDataV2<
                domain_types::connector_flow::Refund,
                RefundFlowData,
                RefundsData,
                RefundsResponseData,
            >,
        >,
    >
    for RouterDataV2<
        domain_types::connector_flow::Refund,
        RefundFlowData,
        RefundsData,
        RefundsResponseData,
    >
{
    type Error = Error;

    fn try_from(
        item: ResponseRouterData<
            WorldnetRefundResponse,
            RouterDataV2<
                domain_types::connector_flow::Refund,
                RefundFlowData,
                RefundsData,
                RefundsResponseData,
            >,
        >,
    ) -> Result<Self, Self::Error> {
        let ResponseRouterData {
            response,
            router_data,
            http_code,
        } = item;
        let mut router_data = router_data;

        if let Some(error) = response.error_string.clone() {
            router_data.resource_common_data.status = RefundStatus::Failure;
            router_data.response = Err(gateway_error_response(
                error,
                response.error_code.clone(),
                http_code,
                raw_response(&response),
            ));
            return Ok(router_data);
        }

        let code = response
            .response_code
            .as_deref()
            .ok_or(ConnectorError::ResponseDeserializationFailed)?;
        match WorldnetResponseCode::from(code) {
            WorldnetResponseCode::Approved => {
                let connector_refund_id = response
                    .unique_ref
                    .clone()
                    .ok_or(ConnectorError::MissingConnectorTransactionID)?;
                router_data.resource_common_data.status = RefundStatus::Success;
                router_data.response = Ok(RefundsResponseData {
                    connector_refund_id,
                    refund_status: RefundStatus::Success,
                    raw_connector_response: raw_response(&response),
                    status_code: http_code,
                });
            }
            _ => {
                router_data.resource_common_data.status = RefundStatus::Failure;
                router_data.response = Err(declined_error_response(&response, http_code));
            }
        }
        Ok(router_data)
    }
}

macro_rules! impl_secure_card_response {
    ($flow: ty, $request: ty, approved_status: $approved: expr) => {
        impl
            TryFrom<
                ResponseRouterData<
                    WorldnetSecureCardResponse,
                    RouterDataV2<$flow, MandateFlowData, $request, MandateResponseData>,
                >,
            > for RouterDataV2<$flow, MandateFlowData, $request, MandateResponseData>
        {
            type Error = Error;

            fn try_from(
                item: ResponseRouterData<
                    WorldnetSecureCardResponse,
                    RouterDataV2<$flow, MandateFlowData, $request, MandateResponseData>,
                >,
            ) -> Result<Self, Self::Error> {
                let ResponseRouterData {
                    response,
                    router_data,
                    http_code,
                } = item;
                let mut router_data = router_data;

                if let Some(error) = response.error_string.clone() {
                    router_data.resource_common_data.status = MandateStatus::Failure;
                    router_data.response = Err(gateway_error_response(
                        error,
                        response.error_code.clone(),
                        http_code,
                        raw_response(&response),
                    ));
                    return Ok(router_data);
                }

                let approved = match response.response_code.as_deref() {
                    Some(code) => WorldnetResponseCode::from(code) == WorldnetResponseCode::Approved,
                    // Older terminals omit RESPONSECODE and signal success by
                    // returning the card reference.
                    None => response.card_reference.is_some(),
                };
                if approved {
                    router_data.resource_common_data.status = $approved;
                    router_data.response = Ok(MandateResponseData {
                        mandate_reference: response.card_reference.clone().map(Secret::new),
                        merchant_reference: response.merchant_ref.clone(),
                        mandate_status: $approved,
                        raw_connector_response: raw_response(&response),
                        status_code: http_code,
                    });
                } else {
                    router_data.resource_common_data.status = MandateStatus::Failure;
                    router_data.response = Err(ErrorResponse {
                        code: response
                            .response_code
                            .clone()
                            .unwrap_or_else(|| NO_ERROR_CODE.to_string()),
                        message: response
                            .response_text
                            .clone()
                            .unwrap_or_else(|| NO_ERROR_MESSAGE.to_string()),
                        reason: response.response_text.clone(),
                        status_code: http_code,
                        attempt_status: Some(AttemptStatus::Failure),
                        connector_transaction_id: None,
                        raw_connector_response: raw_response(&response)
                            .map(|secret| secret.peek().clone()),
                    });
                }
                Ok(router_data)
            }
        }
    };
}

impl_secure_card_response!(
    SetupMandate,
    SetupMandateRequestData,
    approved_status: MandateStatus::Active
);
impl_secure_card_response!(
    RevokeMandate,
    RevokeMandateRequestData,
    approved_status: MandateStatus::Revoked
);

macro_rules! impl_subscription_response {
    ($flow: ty, $request: ty, approved_status: $approved: expr) => {
        impl
            TryFrom<
                ResponseRouterData<
                    WorldnetSubscriptionResponse,
                    RouterDataV2<$flow, SubscriptionFlowData, $request, SubscriptionResponseData>,
                >,
            > for RouterDataV2<$flow, SubscriptionFlowData, $request, SubscriptionResponseData>
        {
            type Error = Error;

            fn try_from(
                item: ResponseRouterData<
                    WorldnetSubscriptionResponse,
                    RouterDataV2<$flow, SubscriptionFlowData, $request, SubscriptionResponseData>,
                >,
            ) -> Result<Self, Self::Error> {
                let ResponseRouterData {
                    response,
                    router_data,
                    http_code,
                } = item;
                let mut router_data = router_data;

                if let Some(error) = response.error_string.clone() {
                    router_data.resource_common_data.status = SubscriptionStatus::Failure;
                    router_data.response = Err(gateway_error_response(
                        error,
                        response.error_code.clone(),
                        http_code,
                        raw_response(&response),
                    ));
                    return Ok(router_data);
                }

                let code = response
                    .response_code
                    .as_deref()
                    .ok_or(ConnectorError::ResponseDeserializationFailed)?;
                match WorldnetResponseCode::from(code) {
                    WorldnetResponseCode::Approved => {
                        router_data.resource_common_data.status = $approved;
                        router_data.response = Ok(SubscriptionResponseData {
                            merchant_reference: response.merchant_ref.clone(),
                            subscription_status: $approved,
                            raw_connector_response: raw_response(&response),
                            status_code: http_code,
                        });
                    }
                    _ => {
                        router_data.resource_common_data.status = SubscriptionStatus::Failure;
                        router_data.response = Err(ErrorResponse {
                            code: response
                                .response_code
                                .clone()
                                .unwrap_or_else(|| NO_ERROR_CODE.to_string()),
                            message: response
                                .response_text
                                .clone()
                                .unwrap_or_else(|| NO_ERROR_MESSAGE.to_string()),
                            reason: response.response_text.clone(),
                            status_code: http_code,
                            attempt_status: Some(AttemptStatus::Failure),
                            connector_transaction_id: None,
                            raw_connector_response: raw_response(&response)
                                .map(|secret| secret.peek().clone()),
                        });
                    }
                }
                Ok(router_data)
            }
        }
    };
}

impl_subscription_response!(
    CreateSubscription,
    CreateSubscriptionData,
    approved_status: SubscriptionStatus::Active
);
impl_subscription_response!(
    CancelSubscription,
    CancelSubscriptionData,
    approved_status: SubscriptionStatus::Cancelled
);
