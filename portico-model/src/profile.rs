/// Remote profile payload served next to the web profile page.
///
/// The wire document lives at `<source URL>.json` and carries exactly
/// these three fields; all of them are required. A document missing or
/// mistyping any field fails to decode as a whole, so consumers never
/// observe a partially populated profile. Unknown extra fields are
/// ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Profile {
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// URL reference to the avatar image. The bytes are fetched
    /// separately; this is not ownership of the image.
    pub avatar_url: String,
}

#[cfg(all(test, feature = "serde"))]
mod tests {
    use super::*;

    #[test]
    fn decodes_the_wire_schema() {
        let payload = r#"{
            "name": "Ada",
            "email": "ada@x.io",
            "avatar_url": "https://img.test/a.png"
        }"#;

        let profile: Profile = serde_json::from_str(payload).unwrap();
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.email, "ada@x.io");
        assert_eq!(profile.avatar_url, "https://img.test/a.png");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let payload = r#"{
            "name": "Ada",
            "email": "ada@x.io",
            "avatar_url": "https://img.test/a.png",
            "plan": "pro",
            "id": 42
        }"#;

        assert!(serde_json::from_str::<Profile>(payload).is_ok());
    }

    #[test]
    fn missing_any_required_field_fails_decode() {
        let payloads = [
            r#"{"email": "ada@x.io", "avatar_url": "https://img.test/a.png"}"#,
            r#"{"name": "Ada", "avatar_url": "https://img.test/a.png"}"#,
            r#"{"name": "Ada", "email": "ada@x.io"}"#,
            r#"{}"#,
        ];

        for payload in payloads {
            assert!(
                serde_json::from_str::<Profile>(payload).is_err(),
                "payload should not decode: {payload}"
            );
        }
    }

    #[test]
    fn mistyped_field_fails_decode() {
        let payload = r#"{"name": 1, "email": "ada@x.io", "avatar_url": "x"}"#;
        assert!(serde_json::from_str::<Profile>(payload).is_err());
    }
}
