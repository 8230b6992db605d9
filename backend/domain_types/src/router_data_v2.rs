use std::marker::PhantomData;

use crate::router_data::{ConnectorAuthType, ErrorResponse};

#[derive(Debug, Clone)]
pub struct RouterDataV2<Flow, ResourceCommonData, FlowSpecificRequest, FlowSpecificResponse> {
    pub flow: PhantomData<Flow>,
    pub resource_common_data: ResourceCommonData,
    pub connector_auth_type: ConnectorAuthType,
    /// Flow-specific data required to construct the connector request.
    pub request: FlowSpecificRequest,
    /// Flow-specific data the connector responds with.
    pub response: Result<FlowSpecificResponse, ErrorResponse>,
}
