//! API operation registry
//!
//! A fixed table of named operations, each mapping to an HTTP method, a
//! path template, cache-tag declarations, and a completion hook. The
//! dispatcher consumes descriptors from this table; nothing else in the
//! crate hard-codes an endpoint.

use crate::domain::result::{Error, Result};

/// HTTP method for an operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// Cache-invalidation label shared between operations that read and write
/// overlapping data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Users,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Users => "Users",
        }
    }
}

/// Whether an operation reads (cacheable) or writes (invalidating)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Query,
    Mutation,
}

/// Post-completion side effect, run by the dispatcher exactly once per call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionHook {
    /// No notification either way
    Silent,
    /// Notify the error sink on rejection, nothing on success
    NotifyError,
    /// Notify the error sink on rejection and emit this message on success
    NotifyBoth { success_message: &'static str },
}

/// The named operations this client can dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationId {
    LoginUser,
    Signup,
    ForgotPassword,
    VerifyOtp,
    AddFund,
    GetUserTransactions,
    GetTransactionsUserId,
    GetBalance,
}

/// Static description of one operation
#[derive(Debug)]
pub struct OperationDescriptor {
    pub id: OperationId,
    pub name: &'static str,
    pub method: Method,
    /// URL template with `:name` placeholders, filled positionally
    pub path_template: &'static str,
    pub kind: OperationKind,
    /// Tags this query's cached result carries
    pub provides: &'static [Tag],
    /// Tags this mutation invalidates on fulfillment
    pub invalidates: &'static [Tag],
    pub hook: CompletionHook,
}

pub static OPERATIONS: &[OperationDescriptor] = &[
    OperationDescriptor {
        id: OperationId::LoginUser,
        name: "loginUser",
        method: Method::Post,
        path_template: "/api/auth/login/user",
        kind: OperationKind::Mutation,
        provides: &[],
        invalidates: &[],
        hook: CompletionHook::NotifyError,
    },
    OperationDescriptor {
        id: OperationId::Signup,
        name: "signup",
        method: Method::Post,
        path_template: "/api/auth/register/user",
        kind: OperationKind::Mutation,
        provides: &[],
        invalidates: &[],
        hook: CompletionHook::Silent,
    },
    OperationDescriptor {
        id: OperationId::ForgotPassword,
        name: "forgotPassword",
        method: Method::Post,
        path_template: "/api/auth/forgot-password",
        kind: OperationKind::Mutation,
        provides: &[],
        invalidates: &[],
        hook: CompletionHook::Silent,
    },
    OperationDescriptor {
        id: OperationId::VerifyOtp,
        name: "verifyOtp",
        method: Method::Post,
        path_template: "/api/auth/verify-otp",
        kind: OperationKind::Mutation,
        provides: &[],
        invalidates: &[],
        hook: CompletionHook::Silent,
    },
    OperationDescriptor {
        id: OperationId::AddFund,
        name: "addFund",
        method: Method::Post,
        path_template: "/api/fund/add",
        kind: OperationKind::Mutation,
        provides: &[],
        invalidates: &[],
        hook: CompletionHook::NotifyBoth {
            success_message: "Funding request submitted successfully",
        },
    },
    OperationDescriptor {
        id: OperationId::GetUserTransactions,
        name: "getUserTransactions",
        method: Method::Get,
        path_template: "/api/transaction/find/user/:id",
        kind: OperationKind::Query,
        provides: &[Tag::Users],
        invalidates: &[],
        hook: CompletionHook::NotifyError,
    },
    OperationDescriptor {
        id: OperationId::GetTransactionsUserId,
        name: "getTransactionsUserId",
        method: Method::Get,
        path_template: "/api/transaction/:userId/:tranId",
        kind: OperationKind::Query,
        provides: &[Tag::Users],
        invalidates: &[],
        hook: CompletionHook::NotifyError,
    },
    OperationDescriptor {
        id: OperationId::GetBalance,
        name: "getBalance",
        method: Method::Get,
        // No path parameter; the argument only scopes the cache key
        path_template: "/api/user/balance",
        kind: OperationKind::Query,
        provides: &[Tag::Users],
        invalidates: &[],
        hook: CompletionHook::NotifyError,
    },
];

impl OperationId {
    /// Look up this operation's descriptor in the static table
    pub fn descriptor(&self) -> &'static OperationDescriptor {
        OPERATIONS
            .iter()
            .find(|d| d.id == *self)
            .expect("every OperationId has a descriptor")
    }
}

/// Fill a path template's `:name` placeholders with positional arguments
///
/// Arguments beyond the placeholder count are allowed; they participate in
/// the cache key but not the URL (the balance lookup works this way).
pub fn render_path(template: &str, args: &[String]) -> Result<String> {
    let mut remaining = args.iter();
    let mut out = String::new();

    for segment in template.split('/') {
        if segment.is_empty() {
            continue;
        }
        out.push('/');
        if segment.starts_with(':') {
            let value = remaining.next().ok_or_else(|| {
                Error::validation(format!("missing value for path parameter {}", segment))
            })?;
            out.push_str(value);
        } else {
            out.push_str(segment);
        }
    }

    Ok(out)
}
