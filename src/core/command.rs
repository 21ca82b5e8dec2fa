use async_trait::async_trait;
use crate::core::errors::ServiceResult;

// Command is a transport-agnostic call unit: one decoded request in, one response out.
// Implementations never fail; a domain error is carried inside the response instead.
#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Response;
}

// into_reply splits a service outcome into the value half and the error-description half
// of a response. On error the value is the zero value of its type.
pub(crate) fn into_reply<T: Default>(res: ServiceResult<T>) -> (T, String) {
    match res {
        Ok(v) => (v, String::new()),
        Err(err) => (T::default(), err.description()),
    }
}
