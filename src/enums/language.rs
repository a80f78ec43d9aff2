use strum_macros::{Display, EnumString, IntoStaticStr};

/// A language for localized fields in Web API responses. Displays and parses as the code the API
/// expects in its `language` parameter, e.g. `"english"` or `"schinese"`.
///
/// See <https://partner.steamgames.com/doc/store/localization/languages> for the list of codes.
#[derive(Display, EnumString, IntoStaticStr, Default, Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[strum(serialize_all = "lowercase")]
pub enum Language {
    Arabic,
    Bulgarian,
    #[strum(serialize = "schinese")]
    ChineseSimplified,
    #[strum(serialize = "tchinese")]
    ChineseTraditional,
    Czech,
    Danish,
    Dutch,
    #[default]
    English,
    Finnish,
    French,
    German,
    Greek,
    Hungarian,
    Italian,
    Japanese,
    #[strum(serialize = "koreana")]
    Korean,
    Norwegian,
    Polish,
    Portuguese,
    #[strum(serialize = "brazilian")]
    PortugueseBrazil,
    Romanian,
    Russian,
    /// Spanish as spoken in Spain.
    #[strum(serialize = "spanish")]
    SpanishSpain,
    #[strum(serialize = "latam")]
    SpanishLatinAmerica,
    Swedish,
    Thai,
    Turkish,
    Ukrainian,
    Vietnamese,
}

impl Language {
    /// The code sent as the `language` parameter.
    pub fn api_language_code(&self) -> &'static str {
        (*self).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_api_language_code() {
        assert_eq!(Language::default().to_string(), "english");
        assert_eq!(Language::Korean.to_string(), "koreana");
        assert_eq!(Language::PortugueseBrazil.api_language_code(), "brazilian");
        assert_eq!(Language::SpanishLatinAmerica.api_language_code(), "latam");
    }

    #[test]
    fn parses_api_language_code() {
        assert_eq!("schinese".parse::<Language>(), Ok(Language::ChineseSimplified));
        assert_eq!("german".parse::<Language>(), Ok(Language::German));
        assert!("klingon".parse::<Language>().is_err());
    }
}
