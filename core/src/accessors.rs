/// Generates a reader and a writer for each named relationship of a model.
///
/// For every `name` this expands to `name(&mut self)`, which goes through
/// [`Relatable::read_relationship`](crate::Relatable::read_relationship), and
/// `set_name(&mut self, value)`, which goes through
/// [`Relatable::set_relationship`](crate::Relatable::set_relationship).
///
/// ```ignore
/// relationship_accessors!(Machine {
///     storage_controllers,
///     network_adapters,
/// });
///
/// let adapters = machine.network_adapters()?;
/// machine.set_storage_controllers(json!([]))?;
/// ```
#[macro_export]
macro_rules! relationship_accessors {
    ($model:ty { $($name:ident),* $(,)? }) => {
        $crate::paste::paste! {
            impl $model {
                $(
                    #[doc = concat!("Reads the `", stringify!($name), "` relationship.")]
                    #[allow(dead_code)]
                    pub fn $name(
                        &mut self,
                    ) -> ::core::result::Result<
                        ::core::option::Option<&$crate::Value>,
                        <$model as $crate::Relatable>::Error,
                    > {
                        <$model as $crate::Relatable>::read_relationship(self, stringify!($name))
                    }

                    #[doc = concat!("Assigns the `", stringify!($name), "` relationship.")]
                    #[allow(dead_code)]
                    pub fn [<set_ $name>](
                        &mut self,
                        value: impl ::core::convert::Into<$crate::Value>,
                    ) -> ::core::result::Result<(), <$model as $crate::Relatable>::Error> {
                        <$model as $crate::Relatable>::set_relationship(
                            self,
                            stringify!($name),
                            value.into(),
                        )
                    }
                )*
            }
        }
    };
}
