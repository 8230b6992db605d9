use std::marker::PhantomData;

use common_utils::{errors::CustomResult, ext_traits::BytesExt};
use domain_types::{errors, router_data_v2::RouterDataV2};
use error_stack::ResultExt;

use crate::types;

/// Projects the four type parameters out of a `RouterDataV2` so macro
/// expansions can name them from a single generic argument.
pub trait FlowTypes {
    type Flow;
    type FlowCommonData;
    type Request;
    type Response;
}

impl<F, FCD, Req, Resp> FlowTypes for RouterDataV2<F, FCD, Req, Resp> {
    type Flow = F;
    type FlowCommonData = FCD;
    type Request = Req;
    type Response = Resp;
}

impl<F, FCD, Req, Resp> FlowTypes for &RouterDataV2<F, FCD, Req, Resp> {
    type Flow = F;
    type FlowCommonData = FCD;
    type Request = Req;
    type Response = Resp;
}

type BridgedRouterData<T> = RouterDataV2<
    <T as FlowTypes>::Flow,
    <T as FlowTypes>::FlowCommonData,
    <T as FlowTypes>::Request,
    <T as FlowTypes>::Response,
>;

type BridgedResponse<T, R> = types::ResponseRouterData<
    R,
    RouterDataV2<
        <T as FlowTypes>::Flow,
        <T as FlowTypes>::FlowCommonData,
        <T as FlowTypes>::Request,
        <T as FlowTypes>::Response,
    >,
>;

/// Zero-sized link between one flow's wire request and wire response types.
#[derive(Clone)]
pub struct Bridge<Req, Res>(pub PhantomData<(Req, Res)>);

/// Converts between typed wire structs and `RouterDataV2` for one flow. The
/// default `response` parses the XML document the gateway answers with.
pub trait BridgeRequestResponse: Send + Sync {
    type RequestBody;
    type ResponseBody;
    type ConnectorInputData: FlowTypes;

    fn request_body(
        &self,
        rd: Self::ConnectorInputData,
    ) -> CustomResult<Self::RequestBody, errors::ConnectorError>
    where
        Self::RequestBody:
            TryFrom<Self::ConnectorInputData, Error = error_stack::Report<errors::ConnectorError>>,
    {
        Self::RequestBody::try_from(rd)
    }

    fn response(
        &self,
        bytes: bytes::Bytes,
    ) -> CustomResult<Self::ResponseBody, errors::ConnectorError>
    where
        Self::ResponseBody: for<'a> serde::Deserialize<'a>,
    {
        if bytes.is_empty() {
            return Err(error_stack::report!(
                errors::ConnectorError::ResponseDeserializationFailed
            ));
        }
        bytes
            .parse_xml(std::any::type_name::<Self::ResponseBody>())
            .change_context(errors::ConnectorError::ResponseDeserializationFailed)
    }

    fn router_data(
        &self,
        response: BridgedResponse<Self::ConnectorInputData, Self::ResponseBody>,
    ) -> CustomResult<BridgedRouterData<Self::ConnectorInputData>, errors::ConnectorError>
    where
        BridgedRouterData<Self::ConnectorInputData>: TryFrom<
            BridgedResponse<Self::ConnectorInputData, Self::ResponseBody>,
            Error = error_stack::Report<errors::ConnectorError>,
        >,
    {
        BridgedRouterData::<Self::ConnectorInputData>::try_from(response)
    }
}

macro_rules! expand_request_body_fn {
    (
        $connector: ty,
        $curl_req: ty,
        $content_type: ident,
        $curl_res: ty,
        $flow: ident,
        $resource_common_data: ty,
        $request: ty,
        $response: ty
    ) => {
        paste::paste! {
            fn get_request_body(
                &self,
                req: &RouterDataV2<$flow, $resource_common_data, $request, $response>,
            ) -> CustomResult<Option<macro_support::RequestContent>, macro_support::ConnectorError>
            {
                let bridge = self.[< $flow:snake >];
                let input_data = [< $connector RouterData >] {
                    connector: self.to_owned(),
                    router_data: req.clone(),
                };
                let request = bridge.request_body(input_data)?;
                Ok(Some(RequestContent::$content_type(Box::new(request))))
            }
        }
    };
}
pub(crate) use expand_request_body_fn;

// Response handling checks the document signature before anything is parsed;
// connectors opt out per flow through `should_verify_response_hash`.
macro_rules! expand_handle_response_fn {
    ($connector: ty, $flow: ident, $resource_common_data: ty, $request: ty, $response: ty) => {
        fn handle_response_v2(
            &self,
            data: &RouterDataV2<$flow, $resource_common_data, $request, $response>,
            event_builder: Option<&mut ConnectorEvent>,
            res: Response,
        ) -> CustomResult<
            RouterDataV2<$flow, $resource_common_data, $request, $response>,
            macro_support::ConnectorError,
        > {
            paste::paste! {let bridge = self.[< $flow:snake >];}

            if interfaces::connector_types::ValidationTrait::should_verify_response_hash(self) {
                let verified = macro_support::SourceVerification::verify(
                    self,
                    data,
                    macro_support::ConnectorSourceVerificationSecrets::AuthHeaders(
                        data.connector_auth_type.clone(),
                    ),
                    &res.response,
                )?;
                if !verified {
                    return Err(error_stack::report!(
                        macro_support::ConnectorError::ResponseHashMismatch
                    ));
                }
            }

            let response_body = bridge.response(res.response.clone())?;
            event_builder.map(|i| i.set_response_body(&response_body));
            let response_router_data = ResponseRouterData {
                response: response_body,
                router_data: data.clone(),
                http_code: res.status_code,
            };
            let result = bridge.router_data(response_router_data)?;
            Ok(result)
        }
    };
}
pub(crate) use expand_handle_response_fn;

macro_rules! expand_shared_defaults {
    (
        function: get_headers,
        flow_name:$flow: ident,
        resource_common_data:$resource_common_data: ty,
        flow_request:$request: ty,
        flow_response:$response: ty,
    ) => {
        fn get_headers(
            &self,
            req: &RouterDataV2<$flow, $resource_common_data, $request, $response>,
        ) -> macro_support::CustomResult<
            Vec<(String, macro_support::Maskable<String>)>,
            macro_support::ConnectorError,
        > {
            self.build_headers(req)
        }
    };
    (
        function: get_content_type,
        flow_name:$flow: ident,
        resource_common_data:$resource_common_data: ty,
        flow_request:$request: ty,
        flow_response:$response: ty,
    ) => {
        fn get_content_type(&self) -> &'static str {
            self.common_get_content_type()
        }
    };
    (
        function: get_error_response_v2,
        flow_name:$flow: ident,
        resource_common_data:$resource_common_data: ty,
        flow_request:$request: ty,
        flow_response:$response: ty,
    ) => {
        fn get_error_response_v2(
            &self,
            res: Response,
            event_builder: Option<&mut ConnectorEvent>,
        ) -> CustomResult<ErrorResponse, macro_support::ConnectorError> {
            self.build_error_response(res, event_builder)
        }
    };
}
pub(crate) use expand_shared_defaults;

/// Implements `ConnectorIntegrationV2` for one flow out of the wire types and
/// per-flow functions the connector supplies.
macro_rules! macro_connector_implementation {
    (
        connector_default_implementations: [$($function_name: ident), *],
        connector: $connector: ty,
        curl_request: $content_type:ident($curl_req: ty),
        curl_response:$curl_res: ty,
        flow_name:$flow: ident,
        resource_common_data:$resource_common_data: ty,
        flow_request:$request: ty,
        flow_response:$response: ty,
        http_method: $http_method_type:ident,
        other_functions: {
            $($function_def: tt)*
        }
    ) => {
        impl
            ConnectorIntegrationV2<
                $flow,
                $resource_common_data,
                $request,
                $response,
            > for $connector
        {
            fn get_http_method(&self) -> common_utils::request::Method {
                common_utils::request::Method::$http_method_type
            }
            $($function_def)*
            $(
                macros::expand_shared_defaults!(
                    function: $function_name,
                    flow_name:$flow,
                    resource_common_data:$resource_common_data,
                    flow_request:$request,
                    flow_response:$response,
                );
            )*
            macros::expand_request_body_fn!(
                $connector,
                $curl_req,
                $content_type,
                $curl_res,
                $flow,
                $resource_common_data,
                $request,
                $response
            );
            macros::expand_handle_response_fn!(
                $connector,
                $flow,
                $resource_common_data,
                $request,
                $response
            );
        }
    };
}
pub(crate) use macro_connector_implementation;

macro_rules! declare_wire_markers {
    ($($wire_type:ident),+) => {
        $(
            paste::paste!{pub struct [<$wire_type Marker>]; }
        )+
    };
}
pub(crate) use declare_wire_markers;

macro_rules! bind_bridge {
    (
        connector: $connector: ident,
        curl_request: $curl_req: ident,
        curl_response: $curl_res: ident,
        router_data: $router_data: ty
    ) => {
        macros::declare_wire_markers!($curl_req, $curl_res);
        paste::paste!{
            impl BridgeRequestResponse for Bridge<[<$curl_req Marker>], [<$curl_res Marker>]> {
                type RequestBody = $curl_req;
                type ResponseBody = $curl_res;
                type ConnectorInputData = [<$connector RouterData>]<$router_data>;
            }
        }
    };
}
pub(crate) use bind_bridge;

macro_rules! declare_connector_input {
    ($connector: ident) => {
        paste::paste! {
            pub struct [<$connector RouterData>]<RD: FlowTypes> {
                pub connector: $connector,
                pub router_data: RD,
            }
            impl<RD: FlowTypes> FlowTypes for [<$connector RouterData>]<RD> {
                type Flow = RD::Flow;
                type FlowCommonData = RD::FlowCommonData;
                type Request = RD::Request;
                type Response = RD::Response;
            }
        }
    };
}
pub(crate) use declare_connector_input;

/// Declares the connector struct: one static bridge per flow, one amount
/// converter per unit, plus whatever member functions the connector needs.
macro_rules! create_all_prerequisites {
    (
        connector_name: $connector: ident,
        api: [
            $(
                (
                    flow: $flow_name: ident,
                    request_body: $flow_request: ident,
                    response_body: $flow_response: ident,
                    router_data: $router_data_type: ty
                )
            ),*
        ],
        amount_converters: [
            $($converter_name:ident : $amount_unit:ty),*
        ],
        member_functions: {
            $($function_def: tt)*
        }
    ) => {
        crate::connectors::macros::expand_macro_prelude!();
        macros::declare_connector_input!($connector);
        $(
            macros::bind_bridge!(
                connector: $connector,
                curl_request: $flow_request,
                curl_response: $flow_response,
                router_data: $router_data_type
            );
        )*
        paste::paste! {
            #[derive(Clone)]
            pub struct $connector {
                $(
                    pub $converter_name: &'static (dyn common_utils::types::AmountConvertor<Output = $amount_unit> + Sync),
                )*
                $(
                    [<$flow_name:snake>]: &'static (dyn BridgeRequestResponse<
                        RequestBody = $flow_request,
                        ResponseBody = $flow_response,
                        ConnectorInputData = [<$connector RouterData>]<$router_data_type>,
                    >),
                )*
            }
            impl $connector {
                pub const fn new() -> &'static Self {
                    &Self{
                        $(
                            $converter_name: &common_utils::types::[<$amount_unit ForConnector>],
                        )*
                        $(
                            [<$flow_name:snake>]: &Bridge::<
                                    [<$flow_request Marker>],
                                    [<$flow_response Marker>]
                                >(PhantomData),
                        )*
                    }
                }
                $($function_def)*
            }
        }
    };
}
pub(crate) use create_all_prerequisites;

macro_rules! expand_macro_prelude {
    () => {
        #[allow(unused_imports)]
        use crate::connectors::macros::{Bridge, BridgeRequestResponse, FlowTypes};
        use std::marker::PhantomData;
        #[allow(unused_imports)]
        mod macro_support {
            pub(super) use common_utils::{errors::CustomResult, request::RequestContent};
            pub(super) use domain_types::errors::ConnectorError;
            pub(super) use domain_types::router_data::ErrorResponse;
            pub(super) use domain_types::router_data_v2::RouterDataV2;
            pub(super) use domain_types::router_response_types::Response;
            pub(super) use hyperswitch_masking::Maskable;
            pub(super) use interfaces::events::connector_api_logs::ConnectorEvent;
            pub(super) use interfaces::verification::{
                ConnectorSourceVerificationSecrets, SourceVerification,
            };
        }
    };
}
pub(crate) use expand_macro_prelude;
