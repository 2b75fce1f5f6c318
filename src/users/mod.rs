pub mod diagnostic;
pub mod error;
pub mod record;
pub mod transport;

pub use self::diagnostic::{
    Diagnostic, DiagnosticCategory, DiagnosticSink, RecordingSink, TracingSink,
};
pub use self::error::FetchError;
pub use self::record::UserRecord;
pub use self::transport::{BoxError, ReqwestTransport, ResponseBody, Transport};

use http::{Request, StatusCode};
use http_body_util::BodyExt;
use tracing::{Instrument, debug, info_span};

pub const USERS_URL: &str =
    "https://my-json-server.typicode.com/uzzalcse/simple_server_with_json_placeholder/users";

/// Fetch the users served at [`USERS_URL`].
///
/// Never fails: any error is reported to `sink` and an empty vector is returned.
pub async fn fetch_users<T, S>(transport: &T, sink: &S) -> Vec<UserRecord>
where
    T: Transport,
    S: DiagnosticSink,
{
    fetch_users_from(USERS_URL, transport, sink).await
}

/// Same as [`fetch_users`] against an explicit `url`.
pub async fn fetch_users_from<T, S>(url: &str, transport: &T, sink: &S) -> Vec<UserRecord>
where
    T: Transport,
    S: DiagnosticSink,
{
    match try_fetch_users(url, transport).await {
        Ok(users) => users,
        Err(err) => {
            sink.emit(Diagnostic::from(&err));
            Vec::new()
        }
    }
}

/// GET `url` and decode the body as a JSON array of [`UserRecord`].
///
/// The body is only read when the status is 200.
/// # Errors
/// Returns a [`FetchError`] naming the stage that failed.
pub async fn try_fetch_users<T>(url: &str, transport: &T) -> Result<Vec<UserRecord>, FetchError>
where
    T: Transport,
{
    let request = Request::get(url)
        .body(())
        .map_err(|e| FetchError::Transport(e.into()))?;

    let span = info_span!("users.fetch", http.method = "GET", url = %url);

    async move {
        let response = transport
            .send(request)
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::UnexpectedStatus(status));
        }

        let body = response
            .into_body()
            .collect()
            .await
            .map_err(FetchError::BodyRead)?
            .to_bytes();

        debug!("response body: {} bytes", body.len());

        let users: Vec<UserRecord> = serde_json::from_slice(&body)?;

        debug!("decoded {} users", users.len());

        Ok(users)
    }
    .instrument(span)
    .await
}
