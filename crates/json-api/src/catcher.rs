//! Error response shaping.
//!
//! Not-found and internal errors go out with no body at all; every other error
//! status keeps salvo's structured error page.

use salvo::{catcher::Catcher, http::ResBody, prelude::*};

#[handler]
async fn strip_error_body(
    req: &mut Request,
    depot: &mut Depot,
    res: &mut Response,
    ctrl: &mut FlowCtrl,
) {
    if matches!(
        res.status_code,
        Some(StatusCode::NOT_FOUND | StatusCode::INTERNAL_SERVER_ERROR)
    ) {
        res.body(ResBody::None);
        ctrl.skip_rest();

        return;
    }

    ctrl.call_next(req, depot, res).await;
}

pub(crate) fn catcher() -> Catcher {
    Catcher::default().hoop(strip_error_body)
}
