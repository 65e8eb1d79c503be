//! `pacs.008.001.08` FI to FI customer credit transfer
//!
//! Covers the elements of the message needed for a plain serial credit
//! transfer: group header, settlement method, payment identification,
//! interbank amount, charge bearer, parties and their agents, and
//! unstructured remittance information.

use chrono::{DateTime, FixedOffset, NaiveDate};
use mx_ir::{
    Code, Decimal, FieldMeta, FieldShape, FieldValue, MetaValue, Record, RecordType, ScalarType,
    TypedRecord,
};
use serde::{Deserialize, Serialize};

pub const NAMESPACE: &str = "urn:iso:std:iso:20022:tech:xsd:pacs.008.001.08";

const MAX35_TEXT: &[(&str, MetaValue)] = &[
    ("min_length", MetaValue::Int(1)),
    ("max_length", MetaValue::Int(35)),
];

const ISO_CURRENCY_CODE: &str = "[A-Z]{3,3}";
const COUNTRY_CODE: &str = "[A-Z]{2,2}";
const BICFI_IDENTIFIER: &str = "[A-Z0-9]{4,4}[A-Z]{2,2}[A-Z0-9]{2,2}([A-Z0-9]{3,3}){0,1}";
const UUID_V4_IDENTIFIER: &str =
    "[a-f0-9]{8}-[a-f0-9]{4}-4[a-f0-9]{3}-[89ab][a-f0-9]{3}-[a-f0-9]{12}";

/// `SettlementMethod1Code`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SettlementMethod1Code {
    #[serde(rename = "INDA")]
    Inda,
    #[serde(rename = "INGA")]
    Inga,
    #[serde(rename = "COVE")]
    Cove,
    #[serde(rename = "CLRG")]
    Clrg,
}

impl Code for SettlementMethod1Code {
    const CODES: &'static [&'static str] = &["INDA", "INGA", "COVE", "CLRG"];

    fn as_code(&self) -> &'static str {
        match self {
            Self::Inda => "INDA",
            Self::Inga => "INGA",
            Self::Cove => "COVE",
            Self::Clrg => "CLRG",
        }
    }
}

/// `ChargeBearerType1Code`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChargeBearerType1Code {
    #[serde(rename = "DEBT")]
    Debt,
    #[serde(rename = "CRED")]
    Cred,
    #[serde(rename = "SHAR")]
    Shar,
    #[serde(rename = "SLEV")]
    Slev,
}

impl Code for ChargeBearerType1Code {
    const CODES: &'static [&'static str] = &["DEBT", "CRED", "SHAR", "SLEV"];

    fn as_code(&self) -> &'static str {
        match self {
            Self::Debt => "DEBT",
            Self::Cred => "CRED",
            Self::Shar => "SHAR",
            Self::Slev => "SLEV",
        }
    }
}

/// Message root
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub fi_to_fi_cstmr_cdt_trf: Option<FiToFiCustomerCreditTransferV08>,
}

impl Record for Document {
    fn record_type(&self) -> RecordType {
        RecordType::of::<Self>()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match name {
            "fi_to_fi_cstmr_cdt_trf" => FieldValue::record(&self.fi_to_fi_cstmr_cdt_trf),
            _ => return None,
        })
    }
}

impl TypedRecord for Document {
    const NAME: &'static str = "Document";

    fn field_metadata() -> &'static [FieldMeta] {
        const FIELDS: &[FieldMeta] = &[FieldMeta::new(
            "fi_to_fi_cstmr_cdt_trf",
            FieldShape::Record(RecordType::of::<FiToFiCustomerCreditTransferV08>),
            &[
                ("name", MetaValue::Text("FIToFICstmrCdtTrf")),
                ("type", MetaValue::Text("Element")),
                ("namespace", MetaValue::Text(NAMESPACE)),
                ("required", MetaValue::Bool(true)),
            ],
        )];
        FIELDS
    }
}

/// `FIToFICustomerCreditTransferV08`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FiToFiCustomerCreditTransferV08 {
    pub grp_hdr: Option<GroupHeader93>,
    #[serde(default)]
    pub cdt_trf_tx_inf: Vec<CreditTransferTransaction39>,
}

impl Record for FiToFiCustomerCreditTransferV08 {
    fn record_type(&self) -> RecordType {
        RecordType::of::<Self>()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match name {
            "grp_hdr" => FieldValue::record(&self.grp_hdr),
            "cdt_trf_tx_inf" => FieldValue::records(&self.cdt_trf_tx_inf),
            _ => return None,
        })
    }
}

impl TypedRecord for FiToFiCustomerCreditTransferV08 {
    const NAME: &'static str = "FIToFICustomerCreditTransferV08";

    fn field_metadata() -> &'static [FieldMeta] {
        const FIELDS: &[FieldMeta] = &[
            FieldMeta::new(
                "grp_hdr",
                FieldShape::Record(RecordType::of::<GroupHeader93>),
                &[
                    ("name", MetaValue::Text("GrpHdr")),
                    ("type", MetaValue::Text("Element")),
                    ("required", MetaValue::Bool(true)),
                ],
            ),
            FieldMeta::new(
                "cdt_trf_tx_inf",
                FieldShape::RecordList(RecordType::of::<CreditTransferTransaction39>),
                &[
                    ("name", MetaValue::Text("CdtTrfTxInf")),
                    ("type", MetaValue::Text("Element")),
                    ("min_occurs", MetaValue::Int(1)),
                    ("max_occurs", MetaValue::Text("unbounded")),
                ],
            ),
        ];
        FIELDS
    }
}

/// `GroupHeader93`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupHeader93 {
    pub msg_id: Option<String>,
    pub cre_dt_tm: Option<DateTime<FixedOffset>>,
    pub nb_of_txs: Option<String>,
    pub ctrl_sum: Option<Decimal>,
    pub sttlm_inf: Option<SettlementInstruction7>,
}

impl Record for GroupHeader93 {
    fn record_type(&self) -> RecordType {
        RecordType::of::<Self>()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match name {
            "msg_id" => FieldValue::scalar(&self.msg_id),
            "cre_dt_tm" => FieldValue::scalar(&self.cre_dt_tm),
            "nb_of_txs" => FieldValue::scalar(&self.nb_of_txs),
            "ctrl_sum" => FieldValue::scalar(&self.ctrl_sum),
            "sttlm_inf" => FieldValue::record(&self.sttlm_inf),
            _ => return None,
        })
    }
}

impl TypedRecord for GroupHeader93 {
    const NAME: &'static str = "GroupHeader93";

    fn field_metadata() -> &'static [FieldMeta] {
        const FIELDS: &[FieldMeta] = &[
            FieldMeta::new(
                "msg_id",
                FieldShape::Scalar(ScalarType::Text),
                &[
                    ("name", MetaValue::Text("MsgId")),
                    ("type", MetaValue::Text("Element")),
                    ("required", MetaValue::Bool(true)),
                    ("min_length", MetaValue::Int(1)),
                    ("max_length", MetaValue::Int(35)),
                ],
            ),
            FieldMeta::new(
                "cre_dt_tm",
                FieldShape::Scalar(ScalarType::DateTime),
                &[
                    ("name", MetaValue::Text("CreDtTm")),
                    ("type", MetaValue::Text("Element")),
                    ("required", MetaValue::Bool(true)),
                ],
            ),
            FieldMeta::new(
                "nb_of_txs",
                FieldShape::Scalar(ScalarType::Text),
                &[
                    ("name", MetaValue::Text("NbOfTxs")),
                    ("type", MetaValue::Text("Element")),
                    ("required", MetaValue::Bool(true)),
                    ("pattern", MetaValue::Text("[0-9]{1,15}")),
                ],
            ),
            FieldMeta::new(
                "ctrl_sum",
                FieldShape::Scalar(ScalarType::Decimal),
                &[
                    ("name", MetaValue::Text("CtrlSum")),
                    ("type", MetaValue::Text("Element")),
                    ("total_digits", MetaValue::Int(18)),
                    ("fraction_digits", MetaValue::Int(17)),
                ],
            ),
            FieldMeta::new(
                "sttlm_inf",
                FieldShape::Record(RecordType::of::<SettlementInstruction7>),
                &[
                    ("name", MetaValue::Text("SttlmInf")),
                    ("type", MetaValue::Text("Element")),
                    ("required", MetaValue::Bool(true)),
                ],
            ),
        ];
        FIELDS
    }
}

/// `SettlementInstruction7`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettlementInstruction7 {
    pub sttlm_mtd: Option<SettlementMethod1Code>,
    pub clr_sys_prtry: Option<String>,
}

impl Record for SettlementInstruction7 {
    fn record_type(&self) -> RecordType {
        RecordType::of::<Self>()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match name {
            "sttlm_mtd" => FieldValue::code(&self.sttlm_mtd),
            "clr_sys_prtry" => FieldValue::scalar(&self.clr_sys_prtry),
            _ => return None,
        })
    }
}

impl TypedRecord for SettlementInstruction7 {
    const NAME: &'static str = "SettlementInstruction7";

    fn field_metadata() -> &'static [FieldMeta] {
        const FIELDS: &[FieldMeta] = &[
            FieldMeta::new(
                "sttlm_mtd",
                FieldShape::Enum(SettlementMethod1Code::CODES),
                &[
                    ("name", MetaValue::Text("SttlmMtd")),
                    ("type", MetaValue::Text("Element")),
                    ("required", MetaValue::Bool(true)),
                ],
            ),
            FieldMeta::new(
                "clr_sys_prtry",
                FieldShape::Scalar(ScalarType::Text),
                MAX35_TEXT,
            ),
        ];
        FIELDS
    }
}

/// `CreditTransferTransaction39`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreditTransferTransaction39 {
    pub pmt_id: Option<PaymentIdentification7>,
    pub intr_bk_sttlm_amt: Option<ActiveCurrencyAndAmount>,
    pub intr_bk_sttlm_dt: Option<NaiveDate>,
    pub chrg_br: Option<ChargeBearerType1Code>,
    pub dbtr: Option<PartyIdentification135>,
    pub dbtr_agt: Option<BranchAndFinancialInstitutionIdentification6>,
    pub cdtr_agt: Option<BranchAndFinancialInstitutionIdentification6>,
    pub cdtr: Option<PartyIdentification135>,
    pub rmt_inf: Option<RemittanceInformation16>,
}

impl Record for CreditTransferTransaction39 {
    fn record_type(&self) -> RecordType {
        RecordType::of::<Self>()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match name {
            "pmt_id" => FieldValue::record(&self.pmt_id),
            "intr_bk_sttlm_amt" => FieldValue::record(&self.intr_bk_sttlm_amt),
            "intr_bk_sttlm_dt" => FieldValue::scalar(&self.intr_bk_sttlm_dt),
            "chrg_br" => FieldValue::code(&self.chrg_br),
            "dbtr" => FieldValue::record(&self.dbtr),
            "dbtr_agt" => FieldValue::record(&self.dbtr_agt),
            "cdtr_agt" => FieldValue::record(&self.cdtr_agt),
            "cdtr" => FieldValue::record(&self.cdtr),
            "rmt_inf" => FieldValue::record(&self.rmt_inf),
            _ => return None,
        })
    }
}

impl TypedRecord for CreditTransferTransaction39 {
    const NAME: &'static str = "CreditTransferTransaction39";

    fn field_metadata() -> &'static [FieldMeta] {
        const FIELDS: &[FieldMeta] = &[
            FieldMeta::new(
                "pmt_id",
                FieldShape::Record(RecordType::of::<PaymentIdentification7>),
                &[
                    ("name", MetaValue::Text("PmtId")),
                    ("required", MetaValue::Bool(true)),
                ],
            ),
            FieldMeta::new(
                "intr_bk_sttlm_amt",
                FieldShape::Record(RecordType::of::<ActiveCurrencyAndAmount>),
                &[
                    ("name", MetaValue::Text("IntrBkSttlmAmt")),
                    ("required", MetaValue::Bool(true)),
                ],
            ),
            FieldMeta::new(
                "intr_bk_sttlm_dt",
                FieldShape::Scalar(ScalarType::Date),
                &[("name", MetaValue::Text("IntrBkSttlmDt"))],
            ),
            FieldMeta::new(
                "chrg_br",
                FieldShape::Enum(ChargeBearerType1Code::CODES),
                &[
                    ("name", MetaValue::Text("ChrgBr")),
                    ("required", MetaValue::Bool(true)),
                ],
            ),
            FieldMeta::new(
                "dbtr",
                FieldShape::Record(RecordType::of::<PartyIdentification135>),
                &[
                    ("name", MetaValue::Text("Dbtr")),
                    ("required", MetaValue::Bool(true)),
                ],
            ),
            FieldMeta::new(
                "dbtr_agt",
                FieldShape::Record(RecordType::of::<BranchAndFinancialInstitutionIdentification6>),
                &[
                    ("name", MetaValue::Text("DbtrAgt")),
                    ("required", MetaValue::Bool(true)),
                ],
            ),
            FieldMeta::new(
                "cdtr_agt",
                FieldShape::Record(RecordType::of::<BranchAndFinancialInstitutionIdentification6>),
                &[
                    ("name", MetaValue::Text("CdtrAgt")),
                    ("required", MetaValue::Bool(true)),
                ],
            ),
            FieldMeta::new(
                "cdtr",
                FieldShape::Record(RecordType::of::<PartyIdentification135>),
                &[
                    ("name", MetaValue::Text("Cdtr")),
                    ("required", MetaValue::Bool(true)),
                ],
            ),
            FieldMeta::new(
                "rmt_inf",
                FieldShape::Record(RecordType::of::<RemittanceInformation16>),
                &[("name", MetaValue::Text("RmtInf"))],
            ),
        ];
        FIELDS
    }
}

/// `PaymentIdentification7`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentIdentification7 {
    pub instr_id: Option<String>,
    pub end_to_end_id: Option<String>,
    pub tx_id: Option<String>,
    pub uetr: Option<String>,
    pub clr_sys_ref: Option<String>,
}

impl Record for PaymentIdentification7 {
    fn record_type(&self) -> RecordType {
        RecordType::of::<Self>()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match name {
            "instr_id" => FieldValue::scalar(&self.instr_id),
            "end_to_end_id" => FieldValue::scalar(&self.end_to_end_id),
            "tx_id" => FieldValue::scalar(&self.tx_id),
            "uetr" => FieldValue::scalar(&self.uetr),
            "clr_sys_ref" => FieldValue::scalar(&self.clr_sys_ref),
            _ => return None,
        })
    }
}

impl TypedRecord for PaymentIdentification7 {
    const NAME: &'static str = "PaymentIdentification7";

    fn field_metadata() -> &'static [FieldMeta] {
        const FIELDS: &[FieldMeta] = &[
            FieldMeta::new("instr_id", FieldShape::Scalar(ScalarType::Text), MAX35_TEXT),
            FieldMeta::new(
                "end_to_end_id",
                FieldShape::Scalar(ScalarType::Text),
                &[
                    ("name", MetaValue::Text("EndToEndId")),
                    ("type", MetaValue::Text("Element")),
                    ("required", MetaValue::Bool(true)),
                    ("min_length", MetaValue::Int(1)),
                    ("max_length", MetaValue::Int(35)),
                ],
            ),
            FieldMeta::new("tx_id", FieldShape::Scalar(ScalarType::Text), MAX35_TEXT),
            FieldMeta::new(
                "uetr",
                FieldShape::Scalar(ScalarType::Text),
                &[
                    ("name", MetaValue::Text("UETR")),
                    ("type", MetaValue::Text("Element")),
                    ("pattern", MetaValue::Text(UUID_V4_IDENTIFIER)),
                ],
            ),
            FieldMeta::new(
                "clr_sys_ref",
                FieldShape::Scalar(ScalarType::Text),
                MAX35_TEXT,
            ),
        ];
        FIELDS
    }
}

/// `ActiveCurrencyAndAmount`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActiveCurrencyAndAmount {
    pub value: Option<Decimal>,
    pub ccy: Option<String>,
}

impl Record for ActiveCurrencyAndAmount {
    fn record_type(&self) -> RecordType {
        RecordType::of::<Self>()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match name {
            "value" => FieldValue::scalar(&self.value),
            "ccy" => FieldValue::scalar(&self.ccy),
            _ => return None,
        })
    }
}

impl TypedRecord for ActiveCurrencyAndAmount {
    const NAME: &'static str = "ActiveCurrencyAndAmount";

    fn field_metadata() -> &'static [FieldMeta] {
        const FIELDS: &[FieldMeta] = &[
            FieldMeta::new(
                "value",
                FieldShape::Scalar(ScalarType::Decimal),
                &[
                    ("required", MetaValue::Bool(true)),
                    ("min_inclusive", MetaValue::Text("0")),
                    ("total_digits", MetaValue::Int(18)),
                    ("fraction_digits", MetaValue::Int(5)),
                ],
            ),
            FieldMeta::new(
                "ccy",
                FieldShape::Scalar(ScalarType::Text),
                &[
                    ("name", MetaValue::Text("Ccy")),
                    ("type", MetaValue::Text("Attribute")),
                    ("required", MetaValue::Bool(true)),
                    ("pattern", MetaValue::Text(ISO_CURRENCY_CODE)),
                ],
            ),
        ];
        FIELDS
    }
}

/// `PartyIdentification135`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PartyIdentification135 {
    pub nm: Option<String>,
    pub pstl_adr: Option<PostalAddress24>,
    pub ctry_of_res: Option<String>,
}

impl Record for PartyIdentification135 {
    fn record_type(&self) -> RecordType {
        RecordType::of::<Self>()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match name {
            "nm" => FieldValue::scalar(&self.nm),
            "pstl_adr" => FieldValue::record(&self.pstl_adr),
            "ctry_of_res" => FieldValue::scalar(&self.ctry_of_res),
            _ => return None,
        })
    }
}

impl TypedRecord for PartyIdentification135 {
    const NAME: &'static str = "PartyIdentification135";

    fn field_metadata() -> &'static [FieldMeta] {
        const FIELDS: &[FieldMeta] = &[
            FieldMeta::new(
                "nm",
                FieldShape::Scalar(ScalarType::Text),
                &[
                    ("name", MetaValue::Text("Nm")),
                    ("min_length", MetaValue::Int(1)),
                    ("max_length", MetaValue::Int(140)),
                ],
            ),
            FieldMeta::new(
                "pstl_adr",
                FieldShape::Record(RecordType::of::<PostalAddress24>),
                &[("name", MetaValue::Text("PstlAdr"))],
            ),
            FieldMeta::new(
                "ctry_of_res",
                FieldShape::Scalar(ScalarType::Text),
                &[
                    ("name", MetaValue::Text("CtryOfRes")),
                    ("pattern", MetaValue::Text(COUNTRY_CODE)),
                ],
            ),
        ];
        FIELDS
    }
}

/// `PostalAddress24`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PostalAddress24 {
    pub strt_nm: Option<String>,
    pub bldg_nb: Option<String>,
    pub pst_cd: Option<String>,
    pub twn_nm: Option<String>,
    pub ctry: Option<String>,
    #[serde(default)]
    pub adr_line: Vec<String>,
}

impl Record for PostalAddress24 {
    fn record_type(&self) -> RecordType {
        RecordType::of::<Self>()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match name {
            "strt_nm" => FieldValue::scalar(&self.strt_nm),
            "bldg_nb" => FieldValue::scalar(&self.bldg_nb),
            "pst_cd" => FieldValue::scalar(&self.pst_cd),
            "twn_nm" => FieldValue::scalar(&self.twn_nm),
            "ctry" => FieldValue::scalar(&self.ctry),
            "adr_line" => FieldValue::scalars(&self.adr_line),
            _ => return None,
        })
    }
}

impl TypedRecord for PostalAddress24 {
    const NAME: &'static str = "PostalAddress24";

    fn field_metadata() -> &'static [FieldMeta] {
        const FIELDS: &[FieldMeta] = &[
            FieldMeta::new(
                "strt_nm",
                FieldShape::Scalar(ScalarType::Text),
                &[
                    ("min_length", MetaValue::Int(1)),
                    ("max_length", MetaValue::Int(70)),
                ],
            ),
            FieldMeta::new(
                "bldg_nb",
                FieldShape::Scalar(ScalarType::Text),
                &[
                    ("min_length", MetaValue::Int(1)),
                    ("max_length", MetaValue::Int(16)),
                ],
            ),
            FieldMeta::new(
                "pst_cd",
                FieldShape::Scalar(ScalarType::Text),
                &[
                    ("min_length", MetaValue::Int(1)),
                    ("max_length", MetaValue::Int(16)),
                ],
            ),
            FieldMeta::new("twn_nm", FieldShape::Scalar(ScalarType::Text), MAX35_TEXT),
            FieldMeta::new(
                "ctry",
                FieldShape::Scalar(ScalarType::Text),
                &[("pattern", MetaValue::Text(COUNTRY_CODE))],
            ),
            FieldMeta::new(
                "adr_line",
                FieldShape::ScalarList(ScalarType::Text),
                &[
                    ("name", MetaValue::Text("AdrLine")),
                    ("min_occurs", MetaValue::Int(0)),
                    ("max_occurs", MetaValue::Int(7)),
                    ("min_length", MetaValue::Int(1)),
                    ("max_length", MetaValue::Int(70)),
                ],
            ),
        ];
        FIELDS
    }
}

/// `BranchAndFinancialInstitutionIdentification6`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BranchAndFinancialInstitutionIdentification6 {
    pub fin_instn_id: Option<FinancialInstitutionIdentification18>,
}

impl Record for BranchAndFinancialInstitutionIdentification6 {
    fn record_type(&self) -> RecordType {
        RecordType::of::<Self>()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match name {
            "fin_instn_id" => FieldValue::record(&self.fin_instn_id),
            _ => return None,
        })
    }
}

impl TypedRecord for BranchAndFinancialInstitutionIdentification6 {
    const NAME: &'static str = "BranchAndFinancialInstitutionIdentification6";

    fn field_metadata() -> &'static [FieldMeta] {
        const FIELDS: &[FieldMeta] = &[FieldMeta::new(
            "fin_instn_id",
            FieldShape::Record(RecordType::of::<FinancialInstitutionIdentification18>),
            &[
                ("name", MetaValue::Text("FinInstnId")),
                ("required", MetaValue::Bool(true)),
            ],
        )];
        FIELDS
    }
}

/// `FinancialInstitutionIdentification18`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialInstitutionIdentification18 {
    pub bicfi: Option<String>,
    pub nm: Option<String>,
    pub pstl_adr: Option<PostalAddress24>,
}

impl Record for FinancialInstitutionIdentification18 {
    fn record_type(&self) -> RecordType {
        RecordType::of::<Self>()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match name {
            "bicfi" => FieldValue::scalar(&self.bicfi),
            "nm" => FieldValue::scalar(&self.nm),
            "pstl_adr" => FieldValue::record(&self.pstl_adr),
            _ => return None,
        })
    }
}

impl TypedRecord for FinancialInstitutionIdentification18 {
    const NAME: &'static str = "FinancialInstitutionIdentification18";

    fn field_metadata() -> &'static [FieldMeta] {
        const FIELDS: &[FieldMeta] = &[
            FieldMeta::new(
                "bicfi",
                FieldShape::Scalar(ScalarType::Text),
                &[
                    ("name", MetaValue::Text("BICFI")),
                    ("pattern", MetaValue::Text(BICFI_IDENTIFIER)),
                ],
            ),
            FieldMeta::new(
                "nm",
                FieldShape::Scalar(ScalarType::Text),
                &[
                    ("min_length", MetaValue::Int(1)),
                    ("max_length", MetaValue::Int(140)),
                ],
            ),
            FieldMeta::new(
                "pstl_adr",
                FieldShape::Record(RecordType::of::<PostalAddress24>),
                &[],
            ),
        ];
        FIELDS
    }
}

/// `RemittanceInformation16`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemittanceInformation16 {
    #[serde(default)]
    pub ustrd: Vec<String>,
}

impl Record for RemittanceInformation16 {
    fn record_type(&self) -> RecordType {
        RecordType::of::<Self>()
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        Some(match name {
            "ustrd" => FieldValue::scalars(&self.ustrd),
            _ => return None,
        })
    }
}

impl TypedRecord for RemittanceInformation16 {
    const NAME: &'static str = "RemittanceInformation16";

    fn field_metadata() -> &'static [FieldMeta] {
        const FIELDS: &[FieldMeta] = &[FieldMeta::new(
            "ustrd",
            FieldShape::ScalarList(ScalarType::Text),
            &[
                ("name", MetaValue::Text("Ustrd")),
                ("max_occurs", MetaValue::Text("unbounded")),
                ("min_length", MetaValue::Int(1)),
                ("max_length", MetaValue::Int(140)),
            ],
        )];
        FIELDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mx_schema::{get_constraints_of, ConstraintKind, FieldKind};

    #[test]
    fn test_every_type_has_a_valid_schema() {
        assert_eq!(get_constraints_of::<Document>().unwrap().len(), 1);
        assert_eq!(get_constraints_of::<FiToFiCustomerCreditTransferV08>().unwrap().len(), 2);
        assert_eq!(get_constraints_of::<GroupHeader93>().unwrap().len(), 5);
        assert_eq!(get_constraints_of::<SettlementInstruction7>().unwrap().len(), 2);
        assert_eq!(get_constraints_of::<CreditTransferTransaction39>().unwrap().len(), 9);
        assert_eq!(get_constraints_of::<PaymentIdentification7>().unwrap().len(), 5);
        assert_eq!(get_constraints_of::<ActiveCurrencyAndAmount>().unwrap().len(), 2);
        assert_eq!(get_constraints_of::<PartyIdentification135>().unwrap().len(), 3);
        assert_eq!(get_constraints_of::<PostalAddress24>().unwrap().len(), 6);
        assert_eq!(
            get_constraints_of::<BranchAndFinancialInstitutionIdentification6>()
                .unwrap()
                .len(),
            1
        );
        assert_eq!(
            get_constraints_of::<FinancialInstitutionIdentification18>()
                .unwrap()
                .len(),
            3
        );
        assert_eq!(get_constraints_of::<RemittanceInformation16>().unwrap().len(), 1);
    }

    #[test]
    fn test_transaction_list_occurs() {
        let schema = get_constraints_of::<FiToFiCustomerCreditTransferV08>().unwrap();
        let field = schema.field("cdt_trf_tx_inf").unwrap();
        assert_eq!(
            field.kind,
            FieldKind::ListOfRecord(RecordType::of::<CreditTransferTransaction39>())
        );
        assert_eq!(field.occurs(), Some((1, None)));
    }

    #[test]
    fn test_code_fields_are_enumerated() {
        let schema = get_constraints_of::<CreditTransferTransaction39>().unwrap();
        let chrg_br = schema.field("chrg_br").unwrap();
        assert_eq!(chrg_br.kind, FieldKind::Enum);
        assert!(chrg_br.is_required());
        match chrg_br.constraint("enumerated") {
            Some(ConstraintKind::Enumerated(allowed)) => {
                assert_eq!(allowed.codes(), ChargeBearerType1Code::CODES);
            }
            other => panic!("expected enumerated constraint, got {other:?}"),
        }
    }

    #[test]
    fn test_field_exposure_matches_metadata() {
        let tx = CreditTransferTransaction39::default();
        for meta in CreditTransferTransaction39::field_metadata() {
            let value = tx.field(meta.name).unwrap();
            assert!(value.is_absent(), "{} should start absent", meta.name);
        }
        assert!(tx.field("unknown").is_none());
    }

    #[test]
    fn test_serde_uses_iso_codes() {
        let json = serde_json::to_string(&SettlementMethod1Code::Clrg).unwrap();
        assert_eq!(json, "\"CLRG\"");

        let amount: ActiveCurrencyAndAmount =
            serde_json::from_str(r#"{"value": "1500.25", "ccy": "EUR"}"#).unwrap();
        assert_eq!(amount.value.unwrap().to_string(), "1500.25");
        assert_eq!(amount.ccy.as_deref(), Some("EUR"));
    }

    #[test]
    fn test_amount_accepts_json_numbers() {
        let amount: ActiveCurrencyAndAmount =
            serde_json::from_str(r#"{"value": 100.5, "ccy": "EUR"}"#).unwrap();
        assert_eq!(amount.value.unwrap().to_string(), "100.5");

        let amount: ActiveCurrencyAndAmount =
            serde_json::from_str(r#"{"value": 42, "ccy": "EUR"}"#).unwrap();
        assert_eq!(amount.value.unwrap(), Decimal::from(42_i64));
    }

    #[test]
    fn test_codes_round_trip_through_as_code() {
        for (code, text) in [
            (ChargeBearerType1Code::Debt, "DEBT"),
            (ChargeBearerType1Code::Cred, "CRED"),
            (ChargeBearerType1Code::Shar, "SHAR"),
            (ChargeBearerType1Code::Slev, "SLEV"),
        ] {
            assert_eq!(code.as_code(), text);
            assert!(ChargeBearerType1Code::CODES.contains(&text));
        }
    }
}
