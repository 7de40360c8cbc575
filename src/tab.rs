pub(crate) struct Tab {
  pub(crate) label: &'static str,
}

impl Tab {
  pub(crate) fn all() -> &'static [Tab] {
    &[
      Tab { label: "Tab 1" },
      Tab { label: "Tab 2" },
      Tab { label: "Tab 3" },
    ]
  }
}
