use shapebox_util::typed_index_struct;

typed_index_struct! {
    /// Position of a shape inside a [`crate::ShapeBox`].
    pub struct ShapeIndex(pub u32);
}
