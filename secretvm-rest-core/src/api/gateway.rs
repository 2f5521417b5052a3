use crate::api::{ApiRequest, AppState, RequestCtx, dispatch};
use async_trait::async_trait;
use pingora::prelude::{HttpPeer, ProxyHttp, Session};
use pingora::{Custom, Error};
use std::sync::Arc;

/// Terminal gateway: every request is answered locally, nothing is proxied.
pub struct DiagnosticGateway {
    state: Arc<AppState>,
}

impl DiagnosticGateway {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }
}

#[async_trait]
impl ProxyHttp for DiagnosticGateway {
    type CTX = RequestCtx;

    fn new_ctx(&self) -> Self::CTX {
        RequestCtx::new()
    }

    async fn upstream_peer(
        &self,
        _session: &mut Session,
        _ctx: &mut Self::CTX,
    ) -> pingora::Result<Box<HttpPeer>> {
        Err(Error::new(Custom(
            "DiagnosticGateway attempted to proxy upstream (bug)",
        )))
    }

    async fn request_filter(
        &self,
        session: &mut Session,
        ctx: &mut Self::CTX,
    ) -> pingora::Result<bool> {
        let req = ApiRequest::from_header(session.req_header());
        let resp = dispatch(&self.state, &req).await;

        let header = resp.response_header(&ctx.request_id)?;
        ctx.status = Some(resp.status.as_u16());

        if resp.body.is_empty() {
            session.write_response_header(Box::new(header), true).await?;
        } else {
            session.write_response_header(Box::new(header), false).await?;
            session.write_response_body(Some(resp.body), true).await?;
        }

        Ok(true)
    }

    async fn logging(&self, session: &mut Session, e: Option<&Error>, ctx: &mut Self::CTX)
    where
        Self::CTX: Send + Sync,
    {
        let req = session.req_header();
        let remote = session
            .client_addr()
            .map(|a| a.to_string())
            .unwrap_or_default();

        match e {
            Some(err) => tracing::warn!(
                request_id = %ctx.request_id,
                remote = %remote,
                method = %req.method,
                uri = %req.uri,
                status = ctx.status,
                elapsed_ms = ctx.elapsed_ms(),
                error = %err,
                "request failed"
            ),
            None => tracing::info!(
                request_id = %ctx.request_id,
                remote = %remote,
                method = %req.method,
                uri = %req.uri,
                status = ctx.status,
                elapsed_ms = ctx.elapsed_ms(),
                "request completed"
            ),
        }
    }
}
