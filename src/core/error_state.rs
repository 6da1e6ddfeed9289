use crate::core::FieldId;

/// One optional message per field. An empty slot means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorState {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub abroad_interest: Option<String>,
    pub country: Option<String>,
    pub event_name: Option<String>,
}

impl ErrorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: FieldId, error: Option<String>) {
        *self.slot_mut(field) = error;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Set slots in field order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> + '_ {
        FieldId::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|err| (field, err)))
    }

    fn slot(&self, field: FieldId) -> &Option<String> {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::AbroadInterest => &self.abroad_interest,
            FieldId::Country => &self.country,
            FieldId::EventName => &self.event_name,
        }
    }

    fn slot_mut(&mut self, field: FieldId) -> &mut Option<String> {
        match field {
            FieldId::Name => &mut self.name,
            FieldId::Email => &mut self.email,
            FieldId::Phone => &mut self.phone,
            FieldId::AbroadInterest => &mut self.abroad_interest,
            FieldId::Country => &mut self.country,
            FieldId::EventName => &mut self.event_name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ErrorState;
    use crate::core::FieldId;

    #[test]
    fn iter_yields_only_set_slots_in_field_order() {
        let mut errors = ErrorState::new();
        errors.set(FieldId::Phone, Some("bad phone".to_string()));
        errors.set(FieldId::Name, Some("bad name".to_string()));

        let collected: Vec<_> = errors.iter().collect();
        assert_eq!(
            collected,
            vec![(FieldId::Name, "bad name"), (FieldId::Phone, "bad phone")]
        );
        assert_eq!(errors.len(), 2);

        errors.set(FieldId::Name, None);
        assert_eq!(errors.get(FieldId::Name), None);
        assert!(!errors.is_empty());

        errors.clear();
        assert!(errors.is_empty());
    }
}
