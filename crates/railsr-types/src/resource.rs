//! Resource catalog and the operations each resource exposes.
//!
//! `Resource::operations()` is the selectable operation list for a resource
//! (what the host's parameter schema offers). The dispatch table in
//! `railsr-core` must cover exactly these pairs.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ConfigurationError;

/// HTTP verbs used by the Railsr API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A category of remote entity exposed as a selectable option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resource {
    #[serde(rename = "enduser")]
    EndUser,
    #[serde(rename = "ledger")]
    Ledger,
    #[serde(rename = "ledgerAccount")]
    LedgerAccount,
    #[serde(rename = "beneficiary")]
    Beneficiary,
    #[serde(rename = "payin")]
    Payin,
    #[serde(rename = "payout")]
    Payout,
    #[serde(rename = "sepaPayment")]
    SepaPayment,
    #[serde(rename = "ukPayment")]
    UkPayment,
    #[serde(rename = "swiftPayment")]
    SwiftPayment,
    #[serde(rename = "internalTransfer")]
    InternalTransfer,
    #[serde(rename = "card")]
    Card,
    #[serde(rename = "cardTransaction")]
    CardTransaction,
    #[serde(rename = "cardProgram")]
    CardProgram,
    #[serde(rename = "fx")]
    Fx,
    #[serde(rename = "fxQuote")]
    FxQuote,
    #[serde(rename = "webhook")]
    Webhook,
    #[serde(rename = "kycCheck")]
    KycCheck,
    #[serde(rename = "kybCheck")]
    KybCheck,
    #[serde(rename = "document")]
    Document,
    #[serde(rename = "companyHolder")]
    CompanyHolder,
    #[serde(rename = "simulation")]
    Simulation,
    #[serde(rename = "report")]
    Report,
    #[serde(rename = "auditLog")]
    AuditLog,
}

impl Resource {
    /// Every resource, in display order.
    pub const ALL: [Resource; 23] = [
        Resource::EndUser,
        Resource::Ledger,
        Resource::LedgerAccount,
        Resource::Beneficiary,
        Resource::Payin,
        Resource::Payout,
        Resource::SepaPayment,
        Resource::UkPayment,
        Resource::SwiftPayment,
        Resource::InternalTransfer,
        Resource::Card,
        Resource::CardTransaction,
        Resource::CardProgram,
        Resource::Fx,
        Resource::FxQuote,
        Resource::Webhook,
        Resource::KycCheck,
        Resource::KybCheck,
        Resource::Document,
        Resource::CompanyHolder,
        Resource::Simulation,
        Resource::Report,
        Resource::AuditLog,
    ];

    /// Wire tag used by the host and in batch files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::EndUser => "enduser",
            Resource::Ledger => "ledger",
            Resource::LedgerAccount => "ledgerAccount",
            Resource::Beneficiary => "beneficiary",
            Resource::Payin => "payin",
            Resource::Payout => "payout",
            Resource::SepaPayment => "sepaPayment",
            Resource::UkPayment => "ukPayment",
            Resource::SwiftPayment => "swiftPayment",
            Resource::InternalTransfer => "internalTransfer",
            Resource::Card => "card",
            Resource::CardTransaction => "cardTransaction",
            Resource::CardProgram => "cardProgram",
            Resource::Fx => "fx",
            Resource::FxQuote => "fxQuote",
            Resource::Webhook => "webhook",
            Resource::KycCheck => "kycCheck",
            Resource::KybCheck => "kybCheck",
            Resource::Document => "document",
            Resource::CompanyHolder => "companyHolder",
            Resource::Simulation => "simulation",
            Resource::Report => "report",
            Resource::AuditLog => "auditLog",
        }
    }

    /// The selectable operations for this resource.
    pub fn operations(&self) -> &'static [&'static str] {
        match self {
            Resource::EndUser => &[
                "create", "get", "update", "list", "delete", "activate", "deactivate", "suspend",
            ],
            Resource::Ledger => &[
                "create",
                "get",
                "update",
                "list",
                "getBalance",
                "getTransactions",
                "getStatement",
            ],
            Resource::LedgerAccount => &[
                "create", "get", "list", "getBalance", "freeze", "unfreeze", "close",
            ],
            Resource::Beneficiary => &["create", "get", "list", "delete", "validate"],
            Resource::Payin => &["get", "list", "simulate"],
            Resource::Payout => &["create", "get", "list", "cancel", "approve"],
            Resource::SepaPayment => &["create", "createInstant", "get", "list"],
            Resource::UkPayment => &["createFps", "createBacs", "get", "list"],
            Resource::SwiftPayment => &["create", "getQuote", "get", "list", "track"],
            Resource::InternalTransfer => &["create", "get", "list", "reverse"],
            Resource::Card => &[
                "createVirtual",
                "createPhysical",
                "get",
                "list",
                "activate",
                "block",
                "unblock",
                "getPin",
                "setPin",
                "getSensitive",
                "setLimits",
            ],
            Resource::CardTransaction => &["get", "list", "createDispute"],
            Resource::CardProgram => &["get", "list"],
            Resource::Fx => &["convert", "getRate", "listConversions"],
            Resource::FxQuote => &["create", "get", "accept", "reject"],
            Resource::Webhook => &["create", "get", "list", "delete", "test"],
            Resource::KycCheck => &["create", "get", "list"],
            Resource::KybCheck => &["create", "get", "list"],
            Resource::Document => &["upload", "get", "list", "delete"],
            Resource::CompanyHolder => &["create", "get", "list", "update"],
            Resource::Simulation => &["simulatePayin", "simulateCardTx", "approveKyc", "rejectKyc"],
            Resource::Report => &["generate", "get", "list", "download"],
            Resource::AuditLog => &["get", "list"],
        }
    }

    pub fn supports(&self, operation: &str) -> bool {
        self.operations().contains(&operation)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Resource {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Resource::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| ConfigurationError::UnknownResource(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_tag_roundtrip() {
        for resource in Resource::ALL {
            assert_eq!(resource.as_str().parse::<Resource>().unwrap(), resource);
        }
    }

    #[test]
    fn test_resource_serde_matches_tag() {
        for resource in Resource::ALL {
            let json = serde_json::to_string(&resource).unwrap();
            assert_eq!(json, format!("\"{}\"", resource.as_str()));
        }
    }

    #[test]
    fn test_unknown_resource() {
        let err = "bankAccount".parse::<Resource>().unwrap_err();
        assert_eq!(err, ConfigurationError::UnknownResource("bankAccount".to_string()));
    }

    #[test]
    fn test_operation_lists_have_no_duplicates() {
        for resource in Resource::ALL {
            let ops = resource.operations();
            let mut sorted = ops.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), ops.len(), "duplicate operation for {resource}");
        }
    }

    #[test]
    fn test_supports() {
        assert!(Resource::Card.supports("createVirtual"));
        assert!(!Resource::Card.supports("create"));
        assert!(Resource::SepaPayment.supports("createInstant"));
    }

    #[test]
    fn test_http_method_display() {
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
        assert_eq!(serde_json::to_string(&HttpMethod::Put).unwrap(), "\"PUT\"");
    }
}
