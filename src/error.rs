use std::{io, net::SocketAddr};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Couldn't read leptos configuration: {0}")]
    Config(String),
    #[error("Couldn't bind to {addr}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error("Server stopped unexpectedly")]
    Serve(#[from] io::Error),
    #[error("Couldn't serialize structured data")]
    StructuredData(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_error_keeps_source() {
        let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
        let err = SiteError::Bind {
            addr,
            source: io::Error::new(io::ErrorKind::AddrInUse, "in use"),
        };
        assert_eq!(err.to_string(), "Couldn't bind to 127.0.0.1:3000");
        let source = std::error::Error::source(&err).expect("bind error should carry a source");
        assert_eq!(source.to_string(), "in use");
    }

    #[test]
    fn test_config_error_message() {
        let err = SiteError::Config("missing [package.metadata.leptos]".to_string());
        assert!(err.to_string().contains("missing [package.metadata.leptos]"));
    }
}
