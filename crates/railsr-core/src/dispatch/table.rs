//! The static (resource, operation) table.

use railsr_types::resource::HttpMethod::{Delete, Get, Post, Put};
use railsr_types::resource::Resource::*;

use super::spec::{OperationSpec as Op, constant, defaulted, field, merge, nested};

const ENDUSER_CREATE: &[super::spec::FieldRule] = &[
    field("firstName", "first_name"),
    field("lastName", "last_name"),
    field("email", "email"),
    field("dateOfBirth", "date_of_birth"),
    merge("enduserAdditionalFields"),
];

const SEPA_CREATE: &[super::spec::FieldRule] = &[
    field("sepaAccountId", "account_id"),
    field("sepaIban", "beneficiary_iban"),
    field("sepaBic", "beneficiary_bic"),
    field("sepaBeneficiaryName", "beneficiary_name"),
    field("sepaAmount", "amount"),
    defaulted("sepaReference", "reference", ""),
];

const UK_CREATE: &[super::spec::FieldRule] = &[
    field("ukAccountId", "account_id"),
    field("ukBeneficiaryAccount", "beneficiary_account_number"),
    field("ukBeneficiarySortCode", "beneficiary_sort_code"),
    field("ukBeneficiaryName", "beneficiary_name"),
    field("ukAmount", "amount"),
    defaulted("ukReference", "reference", ""),
];

const SWIFT_QUOTE: &[super::spec::FieldRule] = &[
    field("swiftAccountId", "account_id"),
    field("swiftIban", "beneficiary_iban"),
    field("swiftBic", "beneficiary_bic"),
    field("swiftBeneficiaryName", "beneficiary_name"),
    field("swiftAmount", "amount"),
    defaulted("swiftCurrency", "currency", "USD"),
];

const SWIFT_CREATE: &[super::spec::FieldRule] = &[
    field("swiftAccountId", "account_id"),
    field("swiftIban", "beneficiary_iban"),
    field("swiftBic", "beneficiary_bic"),
    field("swiftBeneficiaryName", "beneficiary_name"),
    field("swiftAmount", "amount"),
    defaulted("swiftCurrency", "currency", "USD"),
    field("swiftCountry", "beneficiary_country"),
];

const CARD_VIRTUAL: &[super::spec::FieldRule] = &[
    field("cardAccountId", "account_id"),
    field("cardholderName", "cardholder_name"),
    field("cardProgramId", "card_program_id"),
    constant("type", "virtual"),
];

const CARD_PHYSICAL: &[super::spec::FieldRule] = &[
    field("cardAccountId", "account_id"),
    field("cardholderName", "cardholder_name"),
    field("cardProgramId", "card_program_id"),
    constant("type", "physical"),
    nested("cardShippingAddress", "shipping_address"),
];

const SIMULATE_KYC: &[super::spec::FieldRule] = &[field("simulationEnduserId", "enduser_id")];

/// Every supported operation. Lookup is linear; the table is small and
/// resolved once per item.
pub static OPERATIONS: &[Op] = &[
    // End users
    Op::new(EndUser, "create", Post, "/endusers").body(ENDUSER_CREATE),
    Op::new(EndUser, "get", Get, "/endusers/{id}").id("enduserId"),
    Op::new(EndUser, "update", Put, "/endusers/{id}")
        .id("enduserId")
        .body(&[merge("enduserAdditionalFields")]),
    Op::new(EndUser, "list", Get, "/endusers").query(&[merge("enduserFilters")]),
    Op::new(EndUser, "delete", Delete, "/endusers/{id}").id("enduserId"),
    Op::new(EndUser, "activate", Post, "/endusers/{id}/activate").id("enduserId"),
    Op::new(EndUser, "deactivate", Post, "/endusers/{id}/deactivate").id("enduserId"),
    Op::new(EndUser, "suspend", Post, "/endusers/{id}/suspend").id("enduserId"),
    // Ledgers
    Op::new(Ledger, "create", Post, "/ledgers").body(&[
        field("ledgerEnduserId", "enduser_id"),
        defaulted("ledgerCurrency", "currency", "GBP"),
        defaulted("ledgerType", "type", "individual"),
    ]),
    Op::new(Ledger, "get", Get, "/ledgers/{id}").id("ledgerId"),
    // Upstream accepts a bare PUT here; no fields are forwarded.
    Op::new(Ledger, "update", Put, "/ledgers/{id}").id("ledgerId"),
    Op::new(Ledger, "list", Get, "/ledgers"),
    Op::new(Ledger, "getBalance", Get, "/ledgers/{id}/balance").id("ledgerId"),
    Op::new(Ledger, "getTransactions", Get, "/ledgers/{id}/transactions").id("ledgerId"),
    Op::new(Ledger, "getStatement", Get, "/ledgers/{id}/statement").id("ledgerId"),
    // Ledger accounts
    Op::new(LedgerAccount, "create", Post, "/ledger-accounts").body(&[
        field("accountLedgerId", "ledger_id"),
        field("accountName", "name"),
    ]),
    Op::new(LedgerAccount, "get", Get, "/ledger-accounts/{id}").id("accountId"),
    Op::new(LedgerAccount, "list", Get, "/ledger-accounts")
        .query(&[field("accountLedgerId", "ledger_id")]),
    Op::new(LedgerAccount, "getBalance", Get, "/ledger-accounts/{id}/balance").id("accountId"),
    Op::new(LedgerAccount, "freeze", Post, "/ledger-accounts/{id}/freeze").id("accountId"),
    Op::new(LedgerAccount, "unfreeze", Post, "/ledger-accounts/{id}/unfreeze").id("accountId"),
    Op::new(LedgerAccount, "close", Post, "/ledger-accounts/{id}/close").id("accountId"),
    // Beneficiaries
    Op::new(Beneficiary, "create", Post, "/beneficiaries").body(&[
        field("beneficiaryEnduserId", "enduser_id"),
        field("beneficiaryName", "name"),
        field("beneficiaryAccount", "account_number"),
        field("beneficiaryRoutingCode", "routing_code"),
        field("beneficiaryCountry", "country"),
    ]),
    Op::new(Beneficiary, "get", Get, "/beneficiaries/{id}").id("beneficiaryId"),
    Op::new(Beneficiary, "list", Get, "/beneficiaries")
        .query(&[field("beneficiaryEnduserId", "enduser_id")]),
    Op::new(Beneficiary, "delete", Delete, "/beneficiaries/{id}").id("beneficiaryId"),
    Op::new(Beneficiary, "validate", Post, "/beneficiaries/validate").body(&[
        field("beneficiaryAccount", "account_number"),
        field("beneficiaryRoutingCode", "routing_code"),
    ]),
    // Pay-ins
    Op::new(Payin, "get", Get, "/payins/{id}").id("payinId"),
    Op::new(Payin, "list", Get, "/payins"),
    Op::new(Payin, "simulate", Post, "/simulation/payins").body(&[
        field("payinAccountId", "account_id"),
        field("payinAmount", "amount"),
        defaulted("payinCurrency", "currency", "GBP"),
    ]),
    // Payouts
    Op::new(Payout, "create", Post, "/payouts").body(&[
        field("payoutAccountId", "account_id"),
        field("payoutBeneficiaryId", "beneficiary_id"),
        field("payoutAmount", "amount"),
        defaulted("payoutCurrency", "currency", "GBP"),
        defaulted("payoutReference", "reference", ""),
    ]),
    Op::new(Payout, "get", Get, "/payouts/{id}").id("payoutId"),
    Op::new(Payout, "list", Get, "/payouts"),
    Op::new(Payout, "cancel", Post, "/payouts/{id}/cancel").id("payoutId"),
    Op::new(Payout, "approve", Post, "/payouts/{id}/approve").id("payoutId"),
    // SEPA
    Op::new(SepaPayment, "create", Post, "/payments/sepa").body(SEPA_CREATE),
    Op::new(SepaPayment, "createInstant", Post, "/payments/sepa-instant").body(SEPA_CREATE),
    Op::new(SepaPayment, "get", Get, "/payments/sepa/{id}").id("sepaPaymentId"),
    Op::new(SepaPayment, "list", Get, "/payments/sepa"),
    // UK Faster Payments and BACS
    Op::new(UkPayment, "createFps", Post, "/payments/fps").body(UK_CREATE),
    Op::new(UkPayment, "createBacs", Post, "/payments/bacs").body(UK_CREATE),
    Op::new(UkPayment, "get", Get, "/payments/uk/{id}").id("ukPaymentId"),
    Op::new(UkPayment, "list", Get, "/payments/uk"),
    // SWIFT
    Op::new(SwiftPayment, "create", Post, "/payments/swift").body(SWIFT_CREATE),
    Op::new(SwiftPayment, "getQuote", Post, "/payments/swift/quote").body(SWIFT_QUOTE),
    Op::new(SwiftPayment, "get", Get, "/payments/swift/{id}").id("swiftPaymentId"),
    Op::new(SwiftPayment, "list", Get, "/payments/swift"),
    Op::new(SwiftPayment, "track", Get, "/payments/swift/{id}/tracking").id("swiftPaymentId"),
    // Internal transfers
    Op::new(InternalTransfer, "create", Post, "/transfers").body(&[
        field("transferSourceAccountId", "source_account_id"),
        field("transferTargetAccountId", "target_account_id"),
        field("transferAmount", "amount"),
        defaulted("transferCurrency", "currency", "GBP"),
        defaulted("transferReference", "reference", ""),
    ]),
    Op::new(InternalTransfer, "get", Get, "/transfers/{id}").id("transferId"),
    Op::new(InternalTransfer, "list", Get, "/transfers"),
    Op::new(InternalTransfer, "reverse", Post, "/transfers/{id}/reverse").id("transferId"),
    // Cards
    Op::new(Card, "createVirtual", Post, "/cards").body(CARD_VIRTUAL),
    Op::new(Card, "createPhysical", Post, "/cards").body(CARD_PHYSICAL),
    Op::new(Card, "get", Get, "/cards/{id}").id("cardId"),
    Op::new(Card, "list", Get, "/cards").query(&[field("cardAccountId", "account_id")]),
    Op::new(Card, "activate", Post, "/cards/{id}/activate").id("cardId"),
    Op::new(Card, "block", Post, "/cards/{id}/block").id("cardId"),
    Op::new(Card, "unblock", Post, "/cards/{id}/unblock").id("cardId"),
    Op::new(Card, "getPin", Get, "/cards/{id}/pin").id("cardId"),
    Op::new(Card, "setPin", Put, "/cards/{id}/pin")
        .id("cardId")
        .body(&[field("cardPin", "pin")]),
    Op::new(Card, "getSensitive", Get, "/cards/{id}/sensitive").id("cardId"),
    Op::new(Card, "setLimits", Put, "/cards/{id}/limits")
        .id("cardId")
        .body(&[merge("cardLimits")]),
    // Card transactions
    Op::new(CardTransaction, "get", Get, "/card-transactions/{id}").id("cardTransactionId"),
    Op::new(CardTransaction, "list", Get, "/card-transactions")
        .query(&[field("cardTransactionCardId", "card_id")]),
    Op::new(CardTransaction, "createDispute", Post, "/card-transactions/{id}/dispute")
        .id("cardTransactionId")
        .body(&[field("disputeReason", "reason")]),
    // Card programs
    Op::new(CardProgram, "get", Get, "/card-programs/{id}").id("cardProgramIdGet"),
    Op::new(CardProgram, "list", Get, "/card-programs"),
    // FX
    Op::new(Fx, "convert", Post, "/fx/convert").body(&[
        field("fxSourceCurrency", "source_currency"),
        field("fxTargetCurrency", "target_currency"),
        field("fxAmount", "amount"),
        field("fxSourceAccountId", "source_account_id"),
        field("fxTargetAccountId", "target_account_id"),
    ]),
    Op::new(Fx, "getRate", Get, "/fx/rates").query(&[
        field("fxSourceCurrency", "source_currency"),
        field("fxTargetCurrency", "target_currency"),
    ]),
    Op::new(Fx, "listConversions", Get, "/fx/conversions"),
    // FX quotes
    Op::new(FxQuote, "create", Post, "/fx/quotes").body(&[
        field("fxQuoteSourceCurrency", "source_currency"),
        field("fxQuoteTargetCurrency", "target_currency"),
        field("fxQuoteAmount", "amount"),
    ]),
    Op::new(FxQuote, "get", Get, "/fx/quotes/{id}").id("fxQuoteId"),
    Op::new(FxQuote, "accept", Post, "/fx/quotes/{id}/accept").id("fxQuoteId"),
    Op::new(FxQuote, "reject", Post, "/fx/quotes/{id}/reject").id("fxQuoteId"),
    // Webhooks
    Op::new(Webhook, "create", Post, "/webhooks").body(&[
        field("webhookUrl", "url"),
        field("webhookEvents", "events"),
    ]),
    Op::new(Webhook, "get", Get, "/webhooks/{id}").id("webhookId"),
    Op::new(Webhook, "list", Get, "/webhooks"),
    Op::new(Webhook, "delete", Delete, "/webhooks/{id}").id("webhookId"),
    Op::new(Webhook, "test", Post, "/webhooks/{id}/test").id("webhookId"),
    // KYC / KYB
    Op::new(KycCheck, "create", Post, "/kyc/checks").body(&[
        field("kycEnduserId", "enduser_id"),
        defaulted("kycCheckType", "check_type", "identity"),
    ]),
    Op::new(KycCheck, "get", Get, "/kyc/checks/{id}").id("kycCheckId"),
    Op::new(KycCheck, "list", Get, "/kyc/checks").query(&[field("kycEnduserId", "enduser_id")]),
    Op::new(KybCheck, "create", Post, "/kyb/checks").body(&[field("kybCompanyId", "company_id")]),
    Op::new(KybCheck, "get", Get, "/kyb/checks/{id}").id("kybCheckId"),
    Op::new(KybCheck, "list", Get, "/kyb/checks").query(&[field("kybCompanyId", "company_id")]),
    // Documents
    Op::new(Document, "upload", Post, "/documents").body(&[
        field("documentEnduserId", "enduser_id"),
        field("documentType", "document_type"),
        field("documentFileUrl", "file_url"),
    ]),
    Op::new(Document, "get", Get, "/documents/{id}").id("documentId"),
    Op::new(Document, "list", Get, "/documents")
        .query(&[field("documentEnduserId", "enduser_id")]),
    Op::new(Document, "delete", Delete, "/documents/{id}").id("documentId"),
    // Company holders
    Op::new(CompanyHolder, "create", Post, "/company-holders").body(&[
        field("companyName", "name"),
        field("companyRegNumber", "registration_number"),
        field("companyCountry", "country"),
    ]),
    Op::new(CompanyHolder, "get", Get, "/company-holders/{id}").id("companyHolderId"),
    Op::new(CompanyHolder, "list", Get, "/company-holders"),
    // Upstream accepts a bare PUT here; no fields are forwarded.
    Op::new(CompanyHolder, "update", Put, "/company-holders/{id}").id("companyHolderId"),
    // Sandbox simulations
    Op::new(Simulation, "simulatePayin", Post, "/simulation/payins").body(&[
        field("simulationAccountId", "account_id"),
        field("simulationAmount", "amount"),
        defaulted("simulationCurrency", "currency", "GBP"),
    ]),
    Op::new(Simulation, "simulateCardTx", Post, "/simulation/card-transactions").body(&[
        field("simulationCardId", "card_id"),
        field("simulationAmount", "amount"),
        defaulted("simulationCurrency", "currency", "GBP"),
        defaulted("simulationMerchant", "merchant_name", "Test Merchant"),
    ]),
    Op::new(Simulation, "approveKyc", Post, "/simulation/kyc/approve").body(SIMULATE_KYC),
    Op::new(Simulation, "rejectKyc", Post, "/simulation/kyc/reject").body(SIMULATE_KYC),
    // Reports
    Op::new(Report, "generate", Post, "/reports").body(&[
        field("reportType", "type"),
        field("reportStartDate", "start_date"),
        field("reportEndDate", "end_date"),
    ]),
    Op::new(Report, "get", Get, "/reports/{id}").id("reportId"),
    Op::new(Report, "list", Get, "/reports"),
    Op::new(Report, "download", Get, "/reports/{id}/download").id("reportId"),
    // Audit log
    Op::new(AuditLog, "get", Get, "/audit-logs/{id}").id("auditLogId"),
    Op::new(AuditLog, "list", Get, "/audit-logs").query(&[merge("auditLogFilters")]),
];
