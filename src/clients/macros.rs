/// Generates the constructor shared by every service client.
macro_rules! impl_client_new {
    ($client_name:ident, $entity:ty) => {
        impl $client_name {
            pub fn new(inner: crate::actor_framework::ResourceClient<$entity>) -> Self {
                Self { inner }
            }
        }
    };
}

/// Generates a traced lookup-by-id method.
macro_rules! impl_client_get {
    ($client_name:ident, $entity:ty, $error:ty, $method:ident) => {
        impl $client_name {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, id: String) -> Result<Option<$entity>, $error> {
                tracing::debug!("Sending request");
                self.inner.get(id).await.map_err(<$error>::from)
            }
        }
    };
}

macro_rules! impl_basic_client {
    ($client_name:ident, $entity:ty, $error:ty, $method:ident) => {
        impl_client_new!($client_name, $entity);
        impl_client_get!($client_name, $entity, $error, $method);
    };
}
