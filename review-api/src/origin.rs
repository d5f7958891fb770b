use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};

use axum::{
    extract::{ConnectInfo, FromRequestParts},
    http::request::Parts,
};
use review_core::origin::{resolve_client_ip, FORWARDED_FOR_HEADER};

/// Best-effort originating address of the request; never rejects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClientIp(pub Option<IpAddr>);

impl<S> FromRequestParts<S> for ClientIp
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let forwarded_for = parts
            .headers
            .get(FORWARDED_FOR_HEADER)
            .and_then(|value| value.to_str().ok());

        // Present only when served with connect info
        let peer = parts
            .extensions
            .get::<ConnectInfo<SocketAddr>>()
            .map(|ConnectInfo(addr)| addr.ip());

        Ok(ClientIp(resolve_client_ip(forwarded_for, peer)))
    }
}
