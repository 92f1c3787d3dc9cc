// ============================================================================
// VALIDATION - Reglas síncronas por campo
// ============================================================================
// Cada campo tiene una lista ordenada de reglas; el primer fallo es el
// mensaje que se muestra. Un campo vacío solo falla por `Required`.
// ============================================================================

use std::collections::BTreeMap;

use regex::Regex;

lazy_static::lazy_static! {
    pub static ref EMAIL_RE: Regex =
        Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$")
            .expect("valid email regex");
    /// Teléfono de negocio: exactamente 10 dígitos
    pub static ref PHONE_10_RE: Regex = Regex::new(r"^\d{10}$").expect("valid phone regex");
    /// Teléfono de sign-up: 10 dígitos empezando por 6-9
    pub static ref MOBILE_RE: Regex = Regex::new(r"^[6-9]\d{9}$").expect("valid mobile regex");
    pub static ref FIRST_NAME_RE: Regex = Regex::new(r"^[A-Za-z]{3,}$").expect("valid name regex");
    pub static ref LAST_NAME_RE: Regex = Regex::new(r"^[A-Za-z]+$").expect("valid name regex");
    pub static ref UPPERCASE_RE: Regex = Regex::new(r"[A-Z]").expect("valid regex");
    pub static ref DIGIT_RE: Regex = Regex::new(r"[0-9]").expect("valid regex");
    pub static ref SPECIAL_CHAR_RE: Regex =
        Regex::new(r#"[!@#$%^&*(),.?":{}|<>]"#).expect("valid regex");
}

/// Valores de un formulario, por nombre de campo
pub type FormValues = BTreeMap<&'static str, String>;

/// Regex estática comparable (por patrón)
#[derive(Clone, Copy, Debug)]
pub struct Pattern(pub &'static Regex);

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.0.as_str() == other.0.as_str()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Rule {
    Required(&'static str),
    Email(&'static str),
    Matches(Pattern, &'static str),
    MinLength(usize, &'static str),
    OneOf(&'static [&'static str], &'static str),
    Integer(&'static str),
    Number(&'static str),
    /// Igual al valor de otro campo (confirmación de password)
    EqualsField(&'static str, &'static str),
}

impl Rule {
    pub fn matches(regex: &'static Regex, message: &'static str) -> Self {
        Rule::Matches(Pattern(regex), message)
    }

    fn check(&self, value: &str, values: &FormValues) -> Result<(), &'static str> {
        let ok = match self {
            Rule::Required(_) => !value.trim().is_empty(),
            Rule::Email(_) => EMAIL_RE.is_match(value.trim()),
            Rule::Matches(pattern, _) => pattern.0.is_match(value),
            Rule::MinLength(min, _) => value.chars().count() >= *min,
            Rule::OneOf(allowed, _) => allowed.iter().any(|candidate| *candidate == value),
            Rule::Integer(_) => value.trim().parse::<i64>().is_ok(),
            Rule::Number(_) => value
                .trim()
                .parse::<f64>()
                .map(f64::is_finite)
                .unwrap_or(false),
            Rule::EqualsField(other, _) => values.get(other).map(String::as_str) == Some(value),
        };
        if ok {
            Ok(())
        } else {
            Err(self.message())
        }
    }

    fn message(&self) -> &'static str {
        match self {
            Rule::Required(message)
            | Rule::Email(message)
            | Rule::Matches(_, message)
            | Rule::MinLength(_, message)
            | Rule::OneOf(_, message)
            | Rule::Integer(message)
            | Rule::Number(message)
            | Rule::EqualsField(_, message) => *message,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub rules: Vec<Rule>,
}

impl FieldSpec {
    pub fn new(name: &'static str, rules: Vec<Rule>) -> Self {
        Self { name, rules }
    }

    fn is_required(&self) -> bool {
        self.rules.iter().any(|rule| matches!(rule, Rule::Required(_)))
    }

    /// Primer mensaje de error del campo, o `None` si es válido
    pub fn validate(&self, values: &FormValues) -> Option<&'static str> {
        let value = values.get(self.name).map(String::as_str).unwrap_or("");

        if value.trim().is_empty() {
            return self
                .rules
                .iter()
                .find(|rule| matches!(rule, Rule::Required(_)))
                .map(Rule::message)
                .filter(|_| self.is_required());
        }

        self.rules
            .iter()
            .filter(|rule| !matches!(rule, Rule::Required(_)))
            .find_map(|rule| rule.check(value, values).err())
    }
}

/// Esquema de un formulario: campos en orden de render
#[derive(Clone, Debug, PartialEq)]
pub struct Schema {
    pub fields: Vec<FieldSpec>,
}

impl Schema {
    pub fn new(fields: Vec<FieldSpec>) -> Self {
        Self { fields }
    }

    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|field| field.name)
    }

    #[cfg(test)]
    fn validate_field(&self, name: &str, values: &FormValues) -> Option<&'static str> {
        self.fields
            .iter()
            .find(|field| field.name == name)
            .and_then(|field| field.validate(values))
    }

    /// Todos los errores actuales (solo campos inválidos)
    pub fn validate(&self, values: &FormValues) -> BTreeMap<&'static str, &'static str> {
        self.fields
            .iter()
            .filter_map(|field| field.validate(values).map(|message| (field.name, message)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&'static str, &str)]) -> FormValues {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    fn phone_schema(regex: &'static Regex) -> Schema {
        Schema::new(vec![FieldSpec::new(
            "contact_number",
            vec![
                Rule::Required("Contact Number is required"),
                Rule::matches(regex, "bad phone"),
            ],
        )])
    }

    #[test]
    fn ten_digit_phone_accepts_only_exactly_ten_digits() {
        let schema = phone_schema(&PHONE_10_RE);
        for ok in ["0123456789", "9999999999", "1234567890"] {
            assert_eq!(schema.validate_field("contact_number", &values(&[("contact_number", ok)])), None, "{ok}");
        }
        for bad in ["123456789", "12345678901", "12345abcde", "+911234567", "12345 67890", " 0123456789"] {
            assert_eq!(
                schema.validate_field("contact_number", &values(&[("contact_number", bad)])),
                Some("bad phone"),
                "{bad}"
            );
        }
    }

    #[test]
    fn mobile_phone_must_start_with_six_to_nine() {
        let schema = phone_schema(&MOBILE_RE);
        for ok in ["6000000000", "7123456789", "8123456789", "9876543210"] {
            assert_eq!(schema.validate_field("contact_number", &values(&[("contact_number", ok)])), None);
        }
        for bad in ["5123456789", "0123456789", "912345678", "98765432100"] {
            assert!(schema.validate_field("contact_number", &values(&[("contact_number", bad)])).is_some());
        }
    }

    #[test]
    fn empty_required_field_reports_required_message_first() {
        let schema = phone_schema(&PHONE_10_RE);
        assert_eq!(
            schema.validate_field("contact_number", &values(&[("contact_number", "  ")])),
            Some("Contact Number is required")
        );
        assert_eq!(schema.validate_field("contact_number", &FormValues::new()), Some("Contact Number is required"));
    }

    #[test]
    fn optional_empty_field_skips_other_rules() {
        let schema = Schema::new(vec![FieldSpec::new("note", vec![Rule::MinLength(3, "too short")])]);
        assert!(schema.validate(&values(&[("note", "")])).is_empty());
        assert_eq!(schema.validate_field("note", &values(&[("note", "ab")])), Some("too short"));
    }

    #[test]
    fn email_syntax() {
        let schema = Schema::new(vec![FieldSpec::new(
            "email",
            vec![Rule::Required("Email is required"), Rule::Email("Invalid email format")],
        )]);
        assert_eq!(schema.validate_field("email", &values(&[("email", "a.b@c.io")])), None);
        for bad in ["plain", "a@b", "@c.io", "a b@c.io", "a@@c.io"] {
            assert_eq!(
                schema.validate_field("email", &values(&[("email", bad)])),
                Some("Invalid email format"),
                "{bad}"
            );
        }
    }

    #[test]
    fn numbers_and_integers() {
        let schema = Schema::new(vec![
            FieldSpec::new("id", vec![Rule::Required("req"), Rule::Integer("int")]),
            FieldSpec::new("amount", vec![Rule::Required("req"), Rule::Number("num")]),
        ]);
        let errors = schema.validate(&values(&[("id", "12"), ("amount", "10.5")]));
        assert!(errors.is_empty());

        let errors = schema.validate(&values(&[("id", "1.5"), ("amount", "ten")]));
        assert_eq!(errors.get("id"), Some(&"int"));
        assert_eq!(errors.get("amount"), Some(&"num"));

        let errors = schema.validate(&values(&[("id", "7"), ("amount", "inf")]));
        assert_eq!(errors.get("amount"), Some(&"num"));
    }

    #[test]
    fn equals_field_compares_against_sibling() {
        let schema = Schema::new(vec![
            FieldSpec::new("password", vec![Rule::Required("req")]),
            FieldSpec::new(
                "confirm_password",
                vec![Rule::Required("req"), Rule::EqualsField("password", "Passwords must match")],
            ),
        ]);
        let mismatch = values(&[("password", "Secret1!"), ("confirm_password", "Secret2!")]);
        assert_eq!(schema.validate_field("confirm_password", &mismatch), Some("Passwords must match"));

        let matching = values(&[("password", "Secret1!"), ("confirm_password", "Secret1!")]);
        assert_eq!(schema.validate_field("confirm_password", &matching), None);
    }

    #[test]
    fn one_of_is_case_sensitive() {
        let schema = Schema::new(vec![FieldSpec::new(
            "role",
            vec![Rule::Required("req"), Rule::OneOf(&["ADMIN", "STAFF"], "Please select a valid role")],
        )]);
        assert_eq!(schema.validate_field("role", &values(&[("role", "STAFF")])), None);
        assert_eq!(
            schema.validate_field("role", &values(&[("role", "staff")])),
            Some("Please select a valid role")
        );
    }
}
