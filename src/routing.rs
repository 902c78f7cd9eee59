//! Public calculator routes: `/calc/<id>`

use anyhow::Result;
use log::debug;

use crate::calculator::{Calculator, CalculatorId};
use crate::store::CalculatorStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Calculator(CalculatorId),
}

impl Route {
    /// Recognise `/calc/<digits>`; trailing text after the digits is ignored
    pub fn parse(path: &str) -> Option<Route> {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let rest = path.strip_prefix("/calc/")?;
        let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
        if digits_len == 0 {
            return None;
        }
        rest[..digits_len]
            .parse::<u64>()
            .ok()
            .map(|id| Route::Calculator(CalculatorId(id)))
    }

    pub fn path(&self) -> String {
        match self {
            Route::Calculator(id) => format!("/calc/{}", id),
        }
    }
}

/// Look up the calculator a path points at
pub async fn resolve(store: &dyn CalculatorStore, path: &str) -> Result<Option<Calculator>> {
    match Route::parse(path) {
        Some(Route::Calculator(id)) => store.get(id).await,
        None => {
            debug!("No route for path '{}'", path);
            Ok(None)
        }
    }
}

/// Public URL of a calculator
pub fn share_link(base_url: &str, id: CalculatorId) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), Route::Calculator(id).path())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_parse_accepts_digit_prefix() {
        assert_eq!(Route::parse("/calc/12"), Some(Route::Calculator(CalculatorId(12))));
        assert_eq!(Route::parse("/calc/12abc"), Some(Route::Calculator(CalculatorId(12))));
        assert_eq!(Route::parse("/calc/7?ref=mail"), Some(Route::Calculator(CalculatorId(7))));
    }

    #[test]
    fn test_parse_rejects_other_paths() {
        assert_eq!(Route::parse("/calc/"), None);
        assert_eq!(Route::parse("/calc/abc"), None);
        assert_eq!(Route::parse("/other/1"), None);
        assert_eq!(Route::parse("calc/1"), None);
    }

    #[test]
    fn test_share_link_format() {
        assert_eq!(
            share_link("http://cost-calculator-app.vercel.app/", CalculatorId(1625100000000)),
            "http://cost-calculator-app.vercel.app/calc/1625100000000"
        );
    }

    #[tokio::test]
    async fn test_resolve_through_store() {
        let store = MemoryStore::seeded();
        let found = resolve(&store, "/calc/1").await.unwrap();
        assert_eq!(found.map(|c| c.name).as_deref(), Some("Website Development Calculator"));
        assert!(resolve(&store, "/calc/2").await.unwrap().is_none());
        assert!(resolve(&store, "/").await.unwrap().is_none());
    }
}
