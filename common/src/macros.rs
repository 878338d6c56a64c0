#[macro_export]
macro_rules! agg_mod {
    [ $( $name:ident $(,)? )+ ] => {
        $(
            pub mod $name;
        )+
    };
}

/// Parses an enum from its wire id, ignoring ASCII case.
#[macro_export]
macro_rules! impl_from_str_for_enum {
    ($enum_name:ident, $( $variant:ident => $id:literal ),* $(,)?) => {
        impl std::str::FromStr for $enum_name {
            type Err = $crate::utils::UnknownVariant;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                $(
                    if s.eq_ignore_ascii_case($id) {
                        return Ok($enum_name::$variant);
                    }
                )*
                Err($crate::utils::UnknownVariant::new(stringify!($enum_name), s))
            }
        }
    };
}

#[macro_export]
macro_rules! impl_display_for_enum {
    ($enum_name:ident, $( $variant:ident => $id:literal ),* $(,)?) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $( $enum_name::$variant => f.write_str($id), )*
                }
            }
        }
    };
}
