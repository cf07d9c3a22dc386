//! Layout units produced by section builders and consumed by renderers.
//!
//! A report is a list of [`Section`]s, each a list of [`Block`]s. Blocks
//! describe content, not geometry; the renderer decides line breaks and
//! page breaks.

/// Which part of the report a section is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Cover,
    Summary,
    Category(crate::quality::FieldCategory),
    Questions,
    Breakdown,
    Recommendations,
    Appendix,
}

/// Horizontal alignment of a table column
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    #[default]
    Left,
    Right,
}

/// Table column definition
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub header: String,
    /// Share of the content width (all columns of a table sum to 1.0)
    pub width: f32,
    pub align: Align,
}

impl Column {
    #[must_use]
    pub fn new(header: impl Into<String>, width: f32) -> Self {
        Self {
            header: header.into(),
            width,
            align: Align::Left,
        }
    }

    #[must_use]
    pub fn right(mut self) -> Self {
        self.align = Align::Right;
        self
    }
}

/// Tabular data with a header row
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
    /// Render the last row emphasized (totals)
    pub total_row: bool,
}

impl Table {
    #[must_use]
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            total_row: false,
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        debug_assert_eq!(row.len(), self.columns.len());
        self.rows.push(row);
    }
}

/// Content unit within a section
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// Large document title
    Title(String),
    /// Section heading
    Heading(String),
    /// Sub-heading inside a section
    Subheading(String),
    /// Wrapped body text
    Paragraph(String),
    /// Label/value line
    Field { label: String, value: String },
    /// Emphasized figure, e.g. the overall score
    Highlight { label: String, value: String },
    Table(Table),
    /// Numbered or titled item; an empty body draws the title alone
    Item { title: String, body: String },
    /// Verbatim lines in a fixed-width font
    Code(Vec<String>),
    /// Vertical gap of one line
    Spacer,
    /// Continue on a fresh page
    PageBreak,
}

impl Block {
    /// All text carried by the block, in reading order
    #[must_use]
    pub fn text(&self) -> Vec<&str> {
        match self {
            Self::Title(s) | Self::Heading(s) | Self::Subheading(s) | Self::Paragraph(s) => {
                vec![s.as_str()]
            }
            Self::Field { label, value } | Self::Highlight { label, value } => {
                vec![label.as_str(), value.as_str()]
            }
            Self::Item { title, body } if body.is_empty() => vec![title.as_str()],
            Self::Item { title, body } => vec![title.as_str(), body.as_str()],
            Self::Table(table) => table
                .columns
                .iter()
                .map(|c| c.header.as_str())
                .chain(table.rows.iter().flatten().map(String::as_str))
                .collect(),
            Self::Code(lines) => lines.iter().map(String::as_str).collect(),
            Self::Spacer | Self::PageBreak => Vec::new(),
        }
    }
}

/// A titled group of blocks
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub kind: SectionKind,
    pub blocks: Vec<Block>,
}

impl Section {
    #[must_use]
    pub const fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            blocks: Vec::new(),
        }
    }

    pub fn push(&mut self, block: Block) -> &mut Self {
        self.blocks.push(block);
        self
    }

    /// Tables contained in the section
    pub fn tables(&self) -> impl Iterator<Item = &Table> {
        self.blocks.iter().filter_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
    }

    /// Whether any text in the section contains `needle`
    #[must_use]
    pub fn contains_text(&self, needle: &str) -> bool {
        self.blocks
            .iter()
            .flat_map(Block::text)
            .any(|text| text.contains(needle))
    }
}
