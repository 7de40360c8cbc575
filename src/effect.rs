#[derive(Clone, Debug)]
pub(crate) enum Effect {
  SetPage { index: usize },
}
