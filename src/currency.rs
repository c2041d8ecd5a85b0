//! Currency identity and decimal-scale metadata
//!
//! A currency is any fungible instrument: the chain's native coin or an
//! ERC-20 token. The two have deliberately different equality rules. Tokens
//! compare structurally on `(chain_id, address)`; native currencies compare
//! by instance identity, so the process-wide [`EDG`] value is equal only to
//! its own clones. Call sites rely on the native coin being a singleton;
//! do not make native equality structural.

use std::fmt;
use std::sync::{Arc, LazyLock};

use crate::errors::CurrencyError;
use crate::token::Token;

/// Decimals, symbol, and name: the capability shared by every currency.
///
/// Implemented by [`NativeCurrency`], [`Token`], and [`Currency`] itself, so
/// generic code can read the decimal scale without caring which side of the
/// native/token split a value falls on.
pub trait CurrencyLike {
    /// Number of decimal places in the currency's smallest unit.
    fn decimals(&self) -> u8;

    /// Ticker symbol, if known.
    fn symbol(&self) -> Option<&str>;

    /// Human-readable name, if known.
    fn name(&self) -> Option<&str>;
}

pub(crate) fn validate_decimals(decimals: u8) -> Result<u8, CurrencyError> {
    if decimals == u8::MAX {
        tracing::warn!(decimals, "Rejected currency decimals outside [0, 255)");
        return Err(CurrencyError::InvalidDecimals { decimals });
    }
    Ok(decimals)
}

/// Metadata for a chain's base coin.
///
/// Unlike a [`Token`], a native currency has no contract address; its
/// identity is the instance itself. Wrap one in [`Currency::native`] to give
/// it a fresh identity, or use the shared [`EDG`] instance.
///
/// # Examples
///
/// ```
/// use semiomath::{CurrencyLike, NativeCurrency};
///
/// let coin = NativeCurrency::new(18, Some("EDG"), Some("Edgeware")).unwrap();
/// assert_eq!(coin.decimals(), 18);
/// assert_eq!(coin.symbol(), Some("EDG"));
/// ```
#[derive(Debug, Clone)]
pub struct NativeCurrency {
    decimals: u8,
    symbol: Option<String>,
    name: Option<String>,
}

impl NativeCurrency {
    /// Create native-coin metadata.
    ///
    /// Fails with [`CurrencyError::InvalidDecimals`] when `decimals` is 255
    /// or more.
    pub fn new(
        decimals: u8,
        symbol: Option<&str>,
        name: Option<&str>,
    ) -> Result<Self, CurrencyError> {
        Ok(Self {
            decimals: validate_decimals(decimals)?,
            symbol: symbol.map(str::to_owned),
            name: name.map(str::to_owned),
        })
    }
}

impl CurrencyLike for NativeCurrency {
    fn decimals(&self) -> u8 {
        self.decimals
    }

    fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }

    fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// A fungible instrument: the native coin or an ERC-20 token.
///
/// Cloning is cheap. Native clones share the underlying instance, which is
/// what makes them compare equal; see the equality rules on
/// [`PartialEq`](#impl-PartialEq-for-Currency).
///
/// # Examples
///
/// ```
/// use semiomath::{native_currency, Currency, CurrencyLike, NativeCurrency};
///
/// let edg = native_currency();
/// assert!(edg.is_native());
/// assert_eq!(edg.decimals(), 18);
///
/// // A freshly constructed coin with identical fields is a different currency
/// let other = Currency::native(NativeCurrency::new(18, Some("EDG"), Some("Edgeware")).unwrap());
/// assert_ne!(edg, other);
/// ```
#[derive(Debug, Clone)]
pub enum Currency {
    /// The chain's base coin, compared by instance identity.
    Native(Arc<NativeCurrency>),
    /// A contract-backed token, compared by `(chain_id, address)`.
    Token(Token),
}

/// The process-wide native coin: EDG, 18 decimals.
///
/// Every [`Currency`] cloned from this static shares its identity and
/// compares equal to it. It behaves like any other currency except that it
/// is never a token.
pub static EDG: LazyLock<Currency> = LazyLock::new(|| {
    Currency::Native(Arc::new(NativeCurrency {
        decimals: 18,
        symbol: Some("EDG".to_owned()),
        name: Some("Edgeware".to_owned()),
    }))
});

/// A handle to the shared native-coin instance ([`EDG`]).
pub fn native_currency() -> Currency {
    EDG.clone()
}

impl Currency {
    /// Wrap native-coin metadata as a currency with a fresh identity.
    ///
    /// The result is equal only to its own clones, not to [`EDG`] and not
    /// to any other independently wrapped instance, even with identical
    /// fields.
    pub fn native(inner: NativeCurrency) -> Self {
        Self::Native(Arc::new(inner))
    }

    /// Whether this is a native (non-token) currency.
    pub fn is_native(&self) -> bool {
        matches!(self, Self::Native(_))
    }

    /// Whether this is a contract-backed token.
    pub fn is_token(&self) -> bool {
        matches!(self, Self::Token(_))
    }

    /// The underlying token, if this currency is one.
    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Self::Token(token) => Some(token),
            Self::Native(_) => None,
        }
    }
}

impl CurrencyLike for Currency {
    fn decimals(&self) -> u8 {
        match self {
            Self::Native(coin) => coin.decimals(),
            Self::Token(token) => token.decimals(),
        }
    }

    fn symbol(&self) -> Option<&str> {
        match self {
            Self::Native(coin) => coin.symbol(),
            Self::Token(token) => token.symbol(),
        }
    }

    fn name(&self) -> Option<&str> {
        match self {
            Self::Native(coin) => coin.name(),
            Self::Token(token) => token.name(),
        }
    }
}

/// Polymorphic currency equality.
///
/// - Two tokens: structural equality on `(chain_id, address)`.
/// - Two native currencies: instance identity.
/// - One of each: never equal.
impl PartialEq for Currency {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Native(a), Self::Native(b)) => Arc::ptr_eq(a, b),
            (Self::Token(a), Self::Token(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Currency {}

impl From<Token> for Currency {
    fn from(token: Token) -> Self {
        Self::Token(token)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(symbol) = self.symbol() {
            return f.write_str(symbol);
        }
        match self {
            Self::Token(token) => write!(f, "{}", token.address()),
            Self::Native(_) => f.write_str("(native)"),
        }
    }
}

/// Compares two currencies under the polymorphic equality rule.
///
/// Equivalent to `a == b`; provided as a named operation for call sites that
/// read better with one.
pub fn currency_equals(a: &Currency, b: &Currency) -> bool {
    a == b
}
