//! Tables (matrices, alignments, cases) and the environments that build them.

use crate::error::{TableError, TableResult};

use super::{AtomType, ColumnAlignment, LineStyle, MathAtom, MathList, factory};

/// A grid of math lists, with per-column alignment.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// cells, row by row ; rows may have different lengths
    pub cells : Vec<Vec<MathList>>,
    alignments : Vec<ColumnAlignment>,
    /// name of the environment that built the table, if any
    pub environment : Option<String>,
    /// space between columns, in mu
    pub inter_column_spacing : f64,
    /// additional space between rows, in jots
    pub inter_row_additional_spacing : f64,
}

impl Default for Table {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Table {
    /// An empty table
    pub fn new(environment : Option<String>) -> Self {
        Self {
            cells : Vec::new(),
            alignments : Vec::new(),
            environment,
            inter_column_spacing : 0.,
            inter_row_additional_spacing : 0.,
        }
    }

    /// Sets the cell at (`row`, `column`), growing the grid with empty cells as needed.
    pub fn set_cell(&mut self, list : MathList, row : usize, column : usize) {
        if self.cells.len() <= row {
            self.cells.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.cells[row];
        if cells.len() <= column {
            cells.resize_with(column + 1, MathList::new);
        }
        cells[column] = list;
    }

    /// Sets the alignment of `column`. Columns without explicit alignments are centered.
    pub fn set_alignment(&mut self, alignment : ColumnAlignment, column : usize) {
        if self.alignments.len() <= column {
            self.alignments.resize(column + 1, ColumnAlignment::Center);
        }
        self.alignments[column] = alignment;
    }

    /// The alignment of `column`
    pub fn alignment(&self, column : usize) -> ColumnAlignment {
        self.alignments.get(column).copied().unwrap_or_default()
    }

    /// Number of columns: the length of the longest row
    pub fn num_columns(&self) -> usize {
        self.cells.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Number of rows
    pub fn num_rows(&self) -> usize {
        self.cells.len()
    }

    fn require_columns(&self, environment : &str, expected : usize) -> TableResult<()> {
        let found = self.num_columns();
        if found != expected {
            return Err(TableError::InvalidColumnCount {
                environment : environment.to_string(),
                expected,
                found,
            });
        }
        Ok(())
    }

    fn insert_in_every_cell(&mut self, atom : &MathAtom) {
        for cell in self.cells.iter_mut().flatten() {
            cell.atoms_mut().insert(0, atom.clone());
        }
    }
}

/// Delimiters of the matrix environments.
fn matrix_delimiters(environment : &str) -> Option<Option<(&'static str, &'static str)>> {
    match environment {
        "matrix"  => Some(None),
        "pmatrix" => Some(Some(("(", ")"))),
        "bmatrix" => Some(Some(("[", "]"))),
        "Bmatrix" => Some(Some(("{", "}"))),
        "vmatrix" => Some(Some(("vert", "vert"))),
        "Vmatrix" => Some(Some(("Vert", "Vert"))),
        _ => None,
    }
}

fn delimited(list : MathList, environment : &str, left : &str, right : &str) -> TableResult<MathAtom> {
    let boundary = |delimiter : &str| factory::boundary_for_delimiter(delimiter)
        .ok_or_else(|| TableError::UnknownDelimiter {
            environment : environment.to_string(),
            delimiter : delimiter.to_string(),
        });
    let mut inner = super::Inner::new(list);
    inner.set_left_boundary(Some(boundary(left)?))?;
    inner.set_right_boundary(Some(boundary(right)?))?;
    Ok(MathAtom::with_kind(super::AtomKind::Inner(inner), ""))
}

/// Builds the atom for a table in the given environment.
///
/// Without environment, this is a plain left-aligned table. Matrix environments with delimiters and `cases`
/// return an [`AtomType::Inner`] atom wrapping the table, the other environments return the table atom itself.
pub fn table_with_environment(environment : Option<&str>, rows : Vec<Vec<MathList>>) -> TableResult<MathAtom> {
    let mut table = Table::new(environment.map(str::to_string));
    for (i, row) in rows.into_iter().enumerate() {
        for (j, cell) in row.into_iter().enumerate() {
            table.set_cell(cell, i, j);
        }
    }

    let environment = match environment {
        None => {
            table.inter_column_spacing = 0.;
            table.inter_row_additional_spacing = 1.;
            for column in 0 .. table.num_columns() {
                table.set_alignment(ColumnAlignment::Left, column);
            }
            return Ok(MathAtom::table(table));
        },
        Some(environment) => environment,
    };

    if let Some(delimiters) = matrix_delimiters(environment) {
        table.environment = Some("matrix".to_string());
        table.inter_row_additional_spacing = 0.;
        table.inter_column_spacing = 18.;
        table.insert_in_every_cell(&MathAtom::style(LineStyle::Text));

        let table = MathAtom::table(table);
        return Ok(match delimiters {
            Some((left, right)) => delimited(MathList { atoms: vec![table] }, environment, left, right)?,
            None => table,
        });
    }

    match environment {
        "eqalign" | "split" | "aligned" => {
            table.require_columns(environment, 2)?;
            let spacer = MathAtom::new(AtomType::Ordinary, "");
            for row in table.cells.iter_mut() {
                if let Some(cell) = row.get_mut(1) {
                    cell.atoms_mut().insert(0, spacer.clone());
                }
            }
            table.inter_row_additional_spacing = 1.;
            table.inter_column_spacing = 0.;
            table.set_alignment(ColumnAlignment::Right, 0);
            table.set_alignment(ColumnAlignment::Left, 1);
            Ok(MathAtom::table(table))
        },
        "displaylines" | "gather" => {
            table.require_columns(environment, 1)?;
            table.inter_row_additional_spacing = 1.;
            table.inter_column_spacing = 0.;
            table.set_alignment(ColumnAlignment::Center, 0);
            Ok(MathAtom::table(table))
        },
        "eqnarray" => {
            table.require_columns(environment, 3)?;
            table.inter_row_additional_spacing = 1.;
            table.inter_column_spacing = 18.;
            table.set_alignment(ColumnAlignment::Right, 0);
            table.set_alignment(ColumnAlignment::Center, 1);
            table.set_alignment(ColumnAlignment::Left, 2);
            Ok(MathAtom::table(table))
        },
        "cases" => {
            table.require_columns(environment, 2)?;
            table.inter_row_additional_spacing = 0.;
            table.inter_column_spacing = 18.;
            table.set_alignment(ColumnAlignment::Left, 0);
            table.set_alignment(ColumnAlignment::Left, 1);
            table.insert_in_every_cell(&MathAtom::style(LineStyle::Text));

            let thin_space = MathAtom::space(3.);
            delimited(MathList { atoms: vec![thin_space, MathAtom::table(table)] }, environment, "{", ".")
        },
        _ => Err(TableError::UnknownEnvironment(environment.to_string())),
    }
}
