use super::*;

/// Decodes an explicit `null` as the field's zero value.
pub(crate) fn deserialize_nullable<'de, D, T>(
  deserializer: D,
) -> Result<T, D::Error>
where
  D: Deserializer<'de>,
  T: Default + Deserialize<'de>,
{
  Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Renders an item's HTML body (`text`, `about`) as plain text.
#[must_use]
pub fn html_to_text(html: &str) -> String {
  if html.is_empty() {
    return String::new();
  }

  html2text::from_read(html.as_bytes(), usize::MAX)
    .map(|text| text.trim().to_owned())
    .unwrap_or_else(|_| html.to_owned())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[derive(Debug, Deserialize, PartialEq)]
  struct NullableWrapper {
    #[serde(default, deserialize_with = "deserialize_nullable")]
    kids: Vec<u64>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    value: String,
  }

  fn parse(input: &str) -> Result<NullableWrapper, serde_json::Error> {
    serde_json::from_str::<NullableWrapper>(input)
  }

  #[test]
  fn deserialize_nullable_supports_values_null_and_absence() {
    assert_eq!(
      parse(r#"{"kids": [1, 2], "value": "hello"}"#).unwrap(),
      NullableWrapper {
        kids: vec![1, 2],
        value: "hello".into(),
      }
    );

    assert_eq!(
      parse(r#"{"kids": null, "value": null}"#).unwrap(),
      NullableWrapper {
        kids: Vec::new(),
        value: String::new(),
      }
    );

    assert_eq!(parse("{}").unwrap().value, "");

    assert!(
      parse(r#"{"value": true}"#).is_err(),
      "bools should fail deserialization"
    );
  }

  #[test]
  fn html_to_text_decodes_entities() {
    assert_eq!(
      html_to_text("https:&#x2F;&#x2F;example.com&#47;path"),
      "https://example.com/path"
    );
  }

  #[test]
  fn html_to_text_keeps_empty_input_empty() {
    assert_eq!(html_to_text(""), "");
  }
}
