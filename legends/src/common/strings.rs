/// Converts a stored name into its display form.
///
/// Names are stored with underscores in place of spaces, as they are in the legacy data tables.
pub fn display_name(name: &str) -> String {
    name.replace('_', " ")
}

#[cfg(test)]
mod display_name_test {
    use crate::common::display_name;

    #[test]
    fn replaces_underscores_with_spaces() {
        assert_eq!(display_name("Gaerdal_Ironhand"), "Gaerdal Ironhand");
        assert_eq!(display_name("Natsunomeryu"), "Natsunomeryu");
        assert_eq!(display_name("Old_Blue_Wyrm"), "Old Blue Wyrm");
    }
}
