#[derive(Debug, Clone)]
pub struct Authorize;

#[derive(Debug, Clone)]
pub struct Capture;

#[derive(Debug, Clone)]
pub struct Void;

#[derive(Debug, Clone)]
pub struct Refund;

#[derive(Debug, Clone)]
pub struct SetupMandate;

#[derive(Debug, Clone)]
pub struct RevokeMandate;

#[derive(Debug, Clone)]
pub struct RepeatPayment;

#[derive(Debug, Clone)]
pub struct CreateSubscription;

#[derive(Debug, Clone)]
pub struct CancelSubscription;

#[derive(Debug, Clone)]
pub struct SubscriptionCharge;
