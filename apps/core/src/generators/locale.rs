#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    FrFr,
    ZhCn,
    ZhTw,
    JaJp,
    ArSa,
    PtBr,
}

impl Locale {
    pub fn parse(tag: &str) -> Option<Self> {
        let normalized = tag.trim().replace('-', "_").to_ascii_lowercase();
        match normalized.as_str() {
            "en" | "en_us" => Some(Self::En),
            "fr" | "fr_fr" => Some(Self::FrFr),
            "zh_cn" => Some(Self::ZhCn),
            "zh_tw" => Some(Self::ZhTw),
            "ja" | "ja_jp" => Some(Self::JaJp),
            "ar" | "ar_sa" => Some(Self::ArSa),
            "pt_br" => Some(Self::PtBr),
            _ => None,
        }
    }

    /// Unknown tags silently select English.
    pub fn from_tag_or_default(tag: &str) -> Self {
        Self::parse(tag).unwrap_or_default()
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::FrFr => "fr",
            Self::ZhCn => "zh_CN",
            Self::ZhTw => "zh_TW",
            Self::JaJp => "ja",
            Self::ArSa => "ar",
            Self::PtBr => "pt_BR",
        }
    }
}

/// Evaluates `$body` with `$l` bound to the `fake` locale marker for
/// `$locale`. Each arm is monomorphized separately, so the body must produce
/// the same type for every locale.
macro_rules! localized {
    ($locale:expr, $l:ident => $body:expr) => {
        match $locale {
            $crate::generators::Locale::En => {
                let $l = fake::locales::EN;
                $body
            }
            $crate::generators::Locale::FrFr => {
                let $l = fake::locales::FR_FR;
                $body
            }
            $crate::generators::Locale::ZhCn => {
                let $l = fake::locales::ZH_CN;
                $body
            }
            $crate::generators::Locale::ZhTw => {
                let $l = fake::locales::ZH_TW;
                $body
            }
            $crate::generators::Locale::JaJp => {
                let $l = fake::locales::JA_JP;
                $body
            }
            $crate::generators::Locale::ArSa => {
                let $l = fake::locales::AR_SA;
                $body
            }
            $crate::generators::Locale::PtBr => {
                let $l = fake::locales::PT_BR;
                $body
            }
        }
    };
}

pub(crate) use localized;

#[cfg(test)]
mod tests {
    use super::Locale;

    #[test]
    fn parses_short_and_region_tags() {
        assert_eq!(Locale::parse("fr"), Some(Locale::FrFr));
        assert_eq!(Locale::parse("zh_CN"), Some(Locale::ZhCn));
        assert_eq!(Locale::parse("pt-BR"), Some(Locale::PtBr));
        assert_eq!(Locale::parse("xx"), None);
    }

    #[test]
    fn unknown_tag_falls_back_to_english() {
        assert_eq!(Locale::from_tag_or_default("klingon"), Locale::En);
        assert_eq!(Locale::from_tag_or_default(""), Locale::En);
    }
}
