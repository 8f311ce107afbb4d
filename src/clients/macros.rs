/// Generates the boilerplate `get_<entity>` accessor for a client wrapping
/// a [`ResourceClient`](crate::actor_framework::ResourceClient) in a field
/// named `inner`.
#[macro_export]
macro_rules! impl_client_methods {
    ($client_name:ident, $entity:ty, $entity_name_snake:ident) => {
        paste::paste! {
            #[allow(dead_code)]
            impl $client_name {
                #[tracing::instrument(skip(self))]
                pub async fn [<get_ $entity_name_snake>](
                    &self,
                    id: String,
                ) -> Result<Option<$entity>, <$entity as $crate::actor_framework::Entity>::Error> {
                    tracing::debug!("Sending request");
                    self.inner.get(id).await
                }
            }
        }
    };
}

/// Generates a request/response client method for a bespoke message enum.
/// The client must hold the mpsc sender in a field named `sender`, and the
/// error type must have an `ActorCommunicationError(String)` variant.
#[macro_export]
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| <$error_type>::ActorCommunicationError("Actor closed".to_string()))?;

                response.await.map_err(|_| <$error_type>::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}
