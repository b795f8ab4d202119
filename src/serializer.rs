use serde::Serialize;
use serde::de::DeserializeOwned;

/// Text codec used for request and response bodies.
pub trait Serializer: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, Self::Error>;

    fn deserialize<T: DeserializeOwned>(&self, text: &str) -> Result<T, Self::Error>;
}

/// JSON codec backed by `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl Serializer for JsonSerializer {
    type Error = serde_json::Error;

    fn serialize<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, Self::Error> {
        serde_json::to_string(value)
    }

    fn deserialize<T: DeserializeOwned>(&self, text: &str) -> Result<T, Self::Error> {
        serde_json::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct AuthDto {
        email: String,
        password: String,
    }

    #[test]
    fn json_serializer_writes_field_names() {
        let dto = AuthDto {
            email: "admin@mail.ru".to_string(),
            password: "secret".to_string(),
        };
        let text = JsonSerializer.serialize(&dto).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["email"], "admin@mail.ru");
        assert_eq!(value["password"], "secret");
    }

    #[test]
    fn json_serializer_reports_malformed_text() {
        let result: Result<AuthDto, _> = JsonSerializer.deserialize("{\"email\":");
        assert!(result.is_err());
    }
}
