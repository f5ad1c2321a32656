//! Macros for reducing boilerplate when defining entities

/// Implement [`Entity`](crate::core::Entity) for a struct carrying an
/// `id: Option<EntityId>` field.
///
/// # Example
/// ```rust,ignore
/// #[derive(Clone, Debug, Serialize, Deserialize)]
/// pub struct Patient {
///     pub id: Option<EntityId>,
///     pub name: String,
/// }
///
/// impl_entity!(Patient, "patient", "patients");
/// ```
#[macro_export]
macro_rules! impl_entity {
    ($type:ident, $singular:expr, $plural:expr) => {
        impl $crate::core::entity::Entity for $type {
            fn resource_name() -> &'static str {
                $plural
            }

            fn resource_name_singular() -> &'static str {
                $singular
            }

            fn id(&self) -> Option<$crate::core::entity::EntityId> {
                self.id
            }

            fn set_id(&mut self, id: $crate::core::entity::EntityId) {
                self.id = Some(id);
            }
        }
    };
}
