use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::task::{Context, Poll};

use lambda_runtime::{Error as LambdaError, LambdaEvent};
use tower::Service;

use crate::events::{
    ApiGatewayProxyRequest, ApiGatewayProxyResponse, ApiGatewayV2httpRequest,
    ApiGatewayV2httpResponse,
};
use crate::execution_env::tag_execution_environment;

/// Type alias for a boxed adapter future.
pub type AdapterFuture<R> = Pin<Box<dyn Future<Output = Result<R, LambdaError>> + Send>>;

/// Adapter wrapping a single handler method as a Lambda service.
///
/// Each deployed function gets exactly one adapter; there is no routing.
/// The wrapped method receives the already-typed gateway event and returns
/// the full response envelope, so the adapter itself is pass-through.
pub struct GatewayAdapter<F, E, R> {
    handler: F,
    event_type: PhantomData<E>,    // Marker for the gateway event type.
    response_type: PhantomData<R>, // Marker for the response envelope type.
}

impl<F, Fut, E, R> GatewayAdapter<F, E, R>
where
    F: Fn(LambdaEvent<E>) -> Fut,
    Fut: Future<Output = Result<R, LambdaError>> + Send + 'static,
{
    /// Wraps a handler method.
    ///
    /// Tags the execution environment once at construction, matching the
    /// once-per-handler behaviour of the generated adapters.
    pub fn new(handler: F) -> Self {
        tag_execution_environment();
        GatewayAdapter {
            handler,
            event_type: PhantomData,
            response_type: PhantomData,
        }
    }
}

impl<F, Fut, E, R> Service<LambdaEvent<E>> for GatewayAdapter<F, E, R>
where
    F: Fn(LambdaEvent<E>) -> Fut,
    Fut: Future<Output = Result<R, LambdaError>> + Send + 'static,
{
    type Response = R;
    type Error = LambdaError;
    type Future = AdapterFuture<R>;

    /// The adapter holds no state; it is always ready.
    fn poll_ready(&mut self, _: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    /// Invokes the wrapped handler method with the typed event.
    fn call(&mut self, event: LambdaEvent<E>) -> Self::Future {
        Box::pin((self.handler)(event))
    }
}

/// Adapter for REST API (payload format 1.0) endpoints.
pub type RestAdapter<F> = GatewayAdapter<F, ApiGatewayProxyRequest, ApiGatewayProxyResponse>;

/// Adapter for HTTP API (payload format 2.0) endpoints.
pub type HttpApiAdapter<F> = GatewayAdapter<F, ApiGatewayV2httpRequest, ApiGatewayV2httpResponse>;
