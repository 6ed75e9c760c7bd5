//! Response format query parsing helpers.

use salvo::{oapi::extract::QueryParam, prelude::StatusError};

use crate::extensions::*;

/// How a basket is written back to the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BasketFormat {
    Json,
    Text,
}

impl BasketFormat {
    fn parse(value: &str) -> Result<Self, String> {
        match value {
            "json" => Ok(Self::Json),
            "txt" => Ok(Self::Text),
            other => Err(format!("unsupported format {other:?}")),
        }
    }
}

pub(crate) trait FormatExt {
    fn into_basket_format(self) -> Result<BasketFormat, StatusError>;
}

impl FormatExt for QueryParam<String, false> {
    fn into_basket_format(self) -> Result<BasketFormat, StatusError> {
        self.into_inner()
            .map(|value| BasketFormat::parse(&value))
            .transpose()
            .or_400("\"format\" must be one of json, txt")
            .map(|format| format.unwrap_or(BasketFormat::Json))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_formats() {
        assert_eq!(BasketFormat::parse("json"), Ok(BasketFormat::Json));
        assert_eq!(BasketFormat::parse("txt"), Ok(BasketFormat::Text));
        assert!(BasketFormat::parse("xml").is_err());
    }
}
