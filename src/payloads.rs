//! Request bodies expected by the backend's CREATE/UPDATE endpoints.
//!
//! These mirror the JSON shapes the backend accepts. Only structural decoding
//! is performed; field contents are not validated.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Body for `AUTH LOGIN`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Body for `AUTH REGISTER`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Body for `AUTH REFRESH_TOKEN`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RefreshTokenRequest {
    pub refresh: String,
}

/// Body for `AUTH LOGOUT`; the refresh token is blacklisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LogoutRequest {
    pub refresh_token: String,
}

/// Body for `AUTH VERIFY_TOKEN`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VerifyTokenRequest {
    pub token: String,
}

/// Body for `AUTH FORGOT_PASSWORD`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// What a client business sells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub enum BusinessOffering {
    #[serde(rename = "services + products")]
    ServicesAndProducts,
    #[serde(rename = "services")]
    Services,
    #[serde(rename = "products")]
    Products,
    #[serde(rename = "other")]
    Other,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SocialHandles {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default)]
    pub other: Vec<String>,
}

/// Body for `CLIENTS CREATE` and `CLIENTS UPDATE`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ClientProfile {
    pub business_name: String,
    pub contact_person: String,
    pub business_details: String,
    pub brand_key_points: String,
    pub business_address: String,
    pub brand_guidelines_link: String,
    pub business_whatsapp_number: String,
    pub goals_objectives: String,
    pub business_email_address: String,
    pub target_region: String,
    pub brand_guidelines_notes: String,
    pub business_offerings: BusinessOffering,
    pub list_down_field: String,
    pub ugc_drive_link: String,
    pub business_website: String,
    #[serde(default)]
    pub social_handles: SocialHandles,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    Yes,
    No,
}

impl YesNo {
    pub fn is_yes(self) -> bool {
        self == YesNo::Yes
    }
}

/// Body for `CLIENTS WEB_DEV`, the web-development intake form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct WebDevData {
    /// Id of the client this intake belongs to
    pub client: u64,
    pub website_type: String,
    pub num_of_products: u32,
    pub membership: YesNo,
    pub website_structure: String,
    pub design_preference: String,
    pub domain: YesNo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain_info: Option<String>,
    pub hosting: YesNo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hosting_info: Option<String>,
    pub graphic_assets: YesNo,
    pub is_regular_update: YesNo,
    pub is_self_update: YesNo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
}

/// Body for `CALENDAR CREATE` and `CALENDAR UPDATE`, one content-calendar entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CalendarEntry {
    pub date: NaiveDate,
    pub post_count: u32,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub cta: String,
    pub resource: String,
    pub tagline: String,
    pub caption: String,
    pub hashtags: String,
    pub creatives: String,
    pub eng_hooks: String,
    pub internal_status: String,
    pub client_approval: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collaboration: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TeamMember {
    pub user_id: u64,
}

/// Body for `TEAMS CREATE` and `TEAMS UPDATE`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TeamCreate {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub members: Vec<TeamMember>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_profile_sample() {
        let body = json!({
            "business_name": "ABC Corp",
            "contact_person": "John Doe",
            "business_details": "A company specializing in innovative solutions.",
            "brand_key_points": "Innovation, Customer Service, Reliability",
            "business_address": "123 Main St, Springfield, IL",
            "brand_guidelines_link": "https://example.com/brand-guidelines",
            "business_whatsapp_number": "+1234567890",
            "goals_objectives": "Increase market share and customer retention",
            "business_email_address": "contact@abccorp.com",
            "target_region": "North America",
            "brand_guidelines_notes": "Follow brand colors and tone strictly.",
            "business_offerings": "services + products",
            "list_down_field": "Customized services, technology integration",
            "ugc_drive_link": "https://drive.google.com/drive/folders/example",
            "business_website": "https://www.abccorp.com",
            "social_handles": {
                "facebook": "https://www.facebook.com/abccorp",
                "instagram": "https://www.instagram.com/abccorp",
                "other": [
                    "https://www.linkedin.com/company/abccorp",
                    "https://twitter.com/abccorp"
                ]
            },
            "additional_notes": "Ensure timely delivery of social media posts."
        });

        let profile: ClientProfile = serde_json::from_value(body).unwrap();
        assert_eq!(profile.business_name, "ABC Corp");
        assert_eq!(profile.business_offerings, BusinessOffering::ServicesAndProducts);
        assert_eq!(profile.social_handles.other.len(), 2);
        assert_eq!(
            profile.social_handles.facebook.as_deref(),
            Some("https://www.facebook.com/abccorp")
        );
    }

    #[test]
    fn test_business_offering_rejects_unknown() {
        let result: Result<BusinessOffering, _> = serde_json::from_value(json!("consulting"));
        assert!(result.is_err());
        let other: BusinessOffering = serde_json::from_value(json!("other")).unwrap();
        assert_eq!(other, BusinessOffering::Other);
    }

    #[test]
    fn test_web_dev_sample() {
        let body = json!({
            "client": 1,
            "website_type": "ecommerce",
            "num_of_products": 50,
            "membership": "yes",
            "website_structure": "Homepage, About Us, Contact Us, Products",
            "design_preference": "Minimalistic and clean design with a blue color palette",
            "domain": "yes",
            "domain_info": "example.com",
            "hosting": "yes",
            "hosting_info": "Hostgator with unlimited bandwidth",
            "graphic_assets": "yes",
            "is_regular_update": "yes",
            "is_self_update": "no",
            "additional_notes": "We will require regular SEO updates on the blog section."
        });

        let data: WebDevData = serde_json::from_value(body).unwrap();
        assert_eq!(data.client, 1);
        assert_eq!(data.num_of_products, 50);
        assert!(data.membership.is_yes());
        assert!(!data.is_self_update.is_yes());
        assert_eq!(data.domain_info.as_deref(), Some("example.com"));
    }

    #[test]
    fn test_calendar_entry_sample() {
        let body = json!({
            "date": "2024-09-20",
            "post_count": 1,
            "type": "post",
            "category": "Marketing",
            "cta": "Click here to learn more!",
            "resource": "https://example.com/resource",
            "tagline": "Best Post of the Year",
            "caption": "This is an amazing caption that will grab attention!",
            "hashtags": "#Marketing, #SMM, #BusinessGrowth",
            "creatives": "https://example.com/creatives.png",
            "eng_hooks": "What are your thoughts on this?",
            "internal_status": "pending",
            "client_approval": false,
            "comments": "The client liked the creative.",
            "collaboration": "Working with Team A to get more insights."
        });

        let entry: CalendarEntry = serde_json::from_value(body).unwrap();
        assert_eq!(entry.date, NaiveDate::from_ymd_opt(2024, 9, 20).unwrap());
        assert_eq!(entry.kind, "post");
        assert!(!entry.client_approval);

        let encoded = serde_json::to_value(&entry).unwrap();
        assert_eq!(encoded["date"], "2024-09-20");
        assert_eq!(encoded["type"], "post");
    }

    #[test]
    fn test_calendar_entry_bad_date() {
        let body = json!({
            "date": "20-09-2024",
            "post_count": 1,
            "type": "post",
            "category": "",
            "cta": "",
            "resource": "",
            "tagline": "",
            "caption": "",
            "hashtags": "",
            "creatives": "",
            "eng_hooks": "",
            "internal_status": "pending",
            "client_approval": true
        });

        let result: Result<CalendarEntry, _> = serde_json::from_value(body);
        assert!(result.is_err());
    }

    #[test]
    fn test_team_create_sample() {
        let body = json!({
            "name": "Marketing Team",
            "description": "Handles all marketing activities.",
            "members": [
                { "user_id": 1 },
                { "user_id": 2 }
            ]
        });

        let team: TeamCreate = serde_json::from_value(body).unwrap();
        assert_eq!(team.name, "Marketing Team");
        assert_eq!(
            team.members,
            vec![TeamMember { user_id: 1 }, TeamMember { user_id: 2 }]
        );
    }

    #[test]
    fn test_auth_bodies() {
        let login: LoginRequest =
            serde_json::from_value(json!({"username": "jdoe", "password": "secret"})).unwrap();
        assert_eq!(login.username, "jdoe");

        let register: RegisterRequest = serde_json::from_value(json!({
            "username": "jdoe",
            "email": "jdoe@example.com",
            "password": "secret"
        }))
        .unwrap();
        assert_eq!(register.first_name, None);

        let encoded = serde_json::to_value(&register).unwrap();
        assert!(encoded.get("first_name").is_none());

        let refresh: RefreshTokenRequest =
            serde_json::from_value(json!({"refresh": "token"})).unwrap();
        assert_eq!(refresh.refresh, "token");
    }

    #[test]
    fn test_logout_and_verify_bodies() {
        let logout: LogoutRequest =
            serde_json::from_value(json!({"refresh_token": "r-123"})).unwrap();
        assert_eq!(logout.refresh_token, "r-123");

        let missing: Result<LogoutRequest, _> = serde_json::from_value(json!({"refresh": "r"}));
        assert!(missing.is_err());

        let verify: VerifyTokenRequest =
            serde_json::from_value(json!({"token": "a.b.c"})).unwrap();
        assert_eq!(verify.token, "a.b.c");

        let missing: Result<VerifyTokenRequest, _> = serde_json::from_value(json!({}));
        assert!(missing.is_err());
    }
}
