use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Error categories the Mandrill API reports through the `name` field of a
/// failure response.
///
/// The mapping from wire names to variants is closed: a name the service
/// introduces after this crate was published classifies as
/// [`ApiErrorKind::Generic`] rather than failing, so callers can match
/// exhaustively without losing forward compatibility.
pub enum ApiErrorKind {
    /// Parameters of the call were invalid or missing (`ValidationError`).
    Validation,
    /// The API key is not a valid Mandrill key (`Invalid_Key`).
    InvalidKey,
    /// The requested feature requires a paid account (`PaymentRequired`).
    PaymentRequired,
    /// No subaccount exists with the given id (`Unknown_Subaccount`).
    UnknownSubaccount,
    /// No template exists with the given name (`Unknown_Template`).
    UnknownTemplate,
    /// The backing subsystem is down for maintenance (`ServiceUnavailable`).
    ServiceUnavailable,
    /// No message exists with the given id (`Unknown_Message`).
    UnknownMessage,
    /// The tag does not exist or its name contains invalid characters
    /// (`Invalid_Tag_Name`).
    InvalidTagName,
    /// The email is not on the rejection blacklist (`Invalid_Reject`).
    InvalidReject,
    /// No sender exists with the given address (`Unknown_Sender`).
    UnknownSender,
    /// The URL has never been seen in a tracked link (`Unknown_Url`).
    UnknownUrl,
    /// No tracking domain exists with the given name
    /// (`Unknown_TrackingDomain`).
    UnknownTrackingDomain,
    /// The template name is already taken or contains invalid characters
    /// (`Invalid_Template`).
    InvalidTemplate,
    /// No webhook exists with the given id (`Unknown_Webhook`).
    UnknownWebhook,
    /// No inbound domain exists with the given name
    /// (`Unknown_InboundDomain`).
    UnknownInboundDomain,
    /// No inbound route exists with the given id (`Unknown_InboundRoute`).
    UnknownInboundRoute,
    /// No export job exists with the given id (`Unknown_Export`).
    UnknownExport,
    /// A dedicated IP cannot be provisioned while another request is pending
    /// (`IP_ProvisionLimit`).
    IpProvisionLimit,
    /// No dedicated IP pool exists with the given name (`Unknown_Pool`).
    UnknownPool,
    /// The account has no sending history yet (`NoSendingHistory`).
    NoSendingHistory,
    /// The account's reputation is too low to continue (`PoorReputation`).
    PoorReputation,
    /// No dedicated IP exists with the given address (`Unknown_IP`).
    UnknownIp,
    /// The last IP cannot be removed from the default pool
    /// (`Invalid_EmptyDefaultPool`).
    InvalidEmptyDefaultPool,
    /// The default pool cannot be deleted (`Invalid_DeleteDefaultPool`).
    InvalidDeleteDefaultPool,
    /// A non-empty pool cannot be deleted (`Invalid_DeleteNonEmptyPool`).
    InvalidDeleteNonEmptyPool,
    /// The domain is not set up as the dedicated IP's custom reverse DNS
    /// (`Invalid_CustomDNS`).
    InvalidCustomDns,
    /// A custom DNS change for the dedicated IP is still pending
    /// (`Invalid_CustomDNSPending`).
    InvalidCustomDnsPending,
    /// The custom metadata field limit has been reached
    /// (`Metadata_FieldLimit`).
    MetadataFieldLimit,
    /// No metadata field exists with the given name
    /// (`Unknown_MetadataField`).
    UnknownMetadataField,
    /// Fallback for any error name this crate does not recognize.
    Generic,
}

impl ApiErrorKind {
    /// Map a server-supplied error name to a known kind.
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "ValidationError" => Self::Validation,
            "Invalid_Key" => Self::InvalidKey,
            "PaymentRequired" => Self::PaymentRequired,
            "Unknown_Subaccount" => Self::UnknownSubaccount,
            "Unknown_Template" => Self::UnknownTemplate,
            "ServiceUnavailable" => Self::ServiceUnavailable,
            "Unknown_Message" => Self::UnknownMessage,
            "Invalid_Tag_Name" => Self::InvalidTagName,
            "Invalid_Reject" => Self::InvalidReject,
            "Unknown_Sender" => Self::UnknownSender,
            "Unknown_Url" => Self::UnknownUrl,
            "Unknown_TrackingDomain" => Self::UnknownTrackingDomain,
            "Invalid_Template" => Self::InvalidTemplate,
            "Unknown_Webhook" => Self::UnknownWebhook,
            "Unknown_InboundDomain" => Self::UnknownInboundDomain,
            "Unknown_InboundRoute" => Self::UnknownInboundRoute,
            "Unknown_Export" => Self::UnknownExport,
            "IP_ProvisionLimit" => Self::IpProvisionLimit,
            "Unknown_Pool" => Self::UnknownPool,
            "NoSendingHistory" => Self::NoSendingHistory,
            "PoorReputation" => Self::PoorReputation,
            "Unknown_IP" => Self::UnknownIp,
            "Invalid_EmptyDefaultPool" => Self::InvalidEmptyDefaultPool,
            "Invalid_DeleteDefaultPool" => Self::InvalidDeleteDefaultPool,
            "Invalid_DeleteNonEmptyPool" => Self::InvalidDeleteNonEmptyPool,
            "Invalid_CustomDNS" => Self::InvalidCustomDns,
            "Invalid_CustomDNSPending" => Self::InvalidCustomDnsPending,
            "Metadata_FieldLimit" => Self::MetadataFieldLimit,
            "Unknown_MetadataField" => Self::UnknownMetadataField,
            _ => return None,
        })
    }

    /// The wire name the service uses for this kind, if it has one.
    ///
    /// [`ApiErrorKind::Generic`] has no wire name of its own.
    pub fn name(self) -> Option<&'static str> {
        Some(match self {
            Self::Validation => "ValidationError",
            Self::InvalidKey => "Invalid_Key",
            Self::PaymentRequired => "PaymentRequired",
            Self::UnknownSubaccount => "Unknown_Subaccount",
            Self::UnknownTemplate => "Unknown_Template",
            Self::ServiceUnavailable => "ServiceUnavailable",
            Self::UnknownMessage => "Unknown_Message",
            Self::InvalidTagName => "Invalid_Tag_Name",
            Self::InvalidReject => "Invalid_Reject",
            Self::UnknownSender => "Unknown_Sender",
            Self::UnknownUrl => "Unknown_Url",
            Self::UnknownTrackingDomain => "Unknown_TrackingDomain",
            Self::InvalidTemplate => "Invalid_Template",
            Self::UnknownWebhook => "Unknown_Webhook",
            Self::UnknownInboundDomain => "Unknown_InboundDomain",
            Self::UnknownInboundRoute => "Unknown_InboundRoute",
            Self::UnknownExport => "Unknown_Export",
            Self::IpProvisionLimit => "IP_ProvisionLimit",
            Self::UnknownPool => "Unknown_Pool",
            Self::NoSendingHistory => "NoSendingHistory",
            Self::PoorReputation => "PoorReputation",
            Self::UnknownIp => "Unknown_IP",
            Self::InvalidEmptyDefaultPool => "Invalid_EmptyDefaultPool",
            Self::InvalidDeleteDefaultPool => "Invalid_DeleteDefaultPool",
            Self::InvalidDeleteNonEmptyPool => "Invalid_DeleteNonEmptyPool",
            Self::InvalidCustomDns => "Invalid_CustomDNS",
            Self::InvalidCustomDnsPending => "Invalid_CustomDNSPending",
            Self::MetadataFieldLimit => "Metadata_FieldLimit",
            Self::UnknownMetadataField => "Unknown_MetadataField",
            Self::Generic => return None,
        })
    }
}

impl fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name().unwrap_or("GenericError"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message} (code {code})")]
/// Structured error reported by the API in a failure response.
///
/// `message` and `code` are preserved exactly as the service sent them,
/// including for names that fall back to [`ApiErrorKind::Generic`].
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
    pub code: i64,
}
