use std::{convert::Infallible, path::PathBuf, sync::Arc};

use tracing::warn;
use warp::{http::StatusCode, Reply};

use super::ErrorBody;

/// Respond with the current contents of the index file.
/// Respond with `500 Internal Server Error` if it cannot be read.
pub(super) async fn index(index: Arc<PathBuf>) -> Result<warp::reply::Response, Infallible> {
    match tokio::fs::read(index.as_path()).await {
        Ok(contents) => Ok(warp::reply::with_header(
            contents,
            "content-type",
            "text/html; charset=utf-8",
        )
        .into_response()),
        Err(e) => {
            warn!("Failed to read {}: {}", index.display(), e);
            let error = ErrorBody {
                error: format!("{}: {}", index.display(), e),
            };
            let reply =
                warp::reply::with_status(warp::reply::json(&error), StatusCode::INTERNAL_SERVER_ERROR);
            Ok(reply.into_response())
        }
    }
}
