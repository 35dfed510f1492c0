/// Conversion from a boundary model into a freshly-built entity
pub trait MapInto<T> {
    fn map_into(self) -> T;
}

/// Field-level overlay of a boundary model onto an existing entity
///
/// Implementations decide per field what "absent" means; the usual shape is
/// `Option` fields that leave the stored value alone when `None`.
pub trait MergeInto<T> {
    fn merge_into(self, target: &mut T);
}
