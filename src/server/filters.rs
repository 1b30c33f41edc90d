use std::{path::PathBuf, sync::Arc};

use warp::Filter;

use super::handlers;

fn with_index(
    index: Arc<PathBuf>,
) -> impl Filter<Extract = (Arc<PathBuf>,), Error = std::convert::Infallible> + Clone {
    warp::any().map(move || Arc::clone(&index))
}

/// GET /
pub(super) fn index(
    index: Arc<PathBuf>,
) -> impl Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    warp::path::end()
        .and(warp::get())
        .and(with_index(index))
        .and_then(handlers::index)
}
