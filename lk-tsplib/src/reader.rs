#[cfg(test)]
#[path = "../tests/unit/reader_test.rs"]
mod reader_test;

use lk_core::models::common::{Dimension, Distance};
use lk_core::models::Problem;
use lk_core::utils::GenericError;
use std::io::prelude::*;
use std::io::{BufReader, Read};

/// A trait to read a TSPLIB problem.
pub trait TsplibProblem {
    /// Reads a TSPLIB problem.
    fn read_tsplib(self) -> Result<Problem, GenericError>;
}

impl<R: Read> TsplibProblem for BufReader<R> {
    fn read_tsplib(self) -> Result<Problem, GenericError> {
        TsplibReader { buffer: String::new(), reader: self, dimension: None, weight_type: None, weight_format: None }
            .read_problem()
    }
}

impl TsplibProblem for String {
    fn read_tsplib(self) -> Result<Problem, GenericError> {
        BufReader::new(self.as_bytes()).read_tsplib()
    }
}

#[derive(Clone, Copy, PartialEq)]
enum EdgeWeightType {
    Euc2d,
    Ceil2d,
    Explicit,
}

#[derive(Clone, Copy, PartialEq)]
enum EdgeWeightFormat {
    FullMatrix,
    UpperRow,
    UpperDiagRow,
    LowerRow,
    LowerDiagRow,
}

struct TsplibReader<R: Read> {
    reader: BufReader<R>,
    buffer: String,
    dimension: Option<Dimension>,
    weight_type: Option<EdgeWeightType>,
    weight_format: Option<EdgeWeightFormat>,
}

impl<R: Read> TsplibReader<R> {
    fn read_problem(mut self) -> Result<Problem, GenericError> {
        let mut coordinates = None;
        let mut weights = None;

        loop {
            if read_line(&mut self.reader, &mut self.buffer)? == 0 {
                break;
            }

            let line = self.buffer.trim().to_string();
            if line.is_empty() {
                continue;
            }

            if let Some((key, value)) = line.split_once(':') {
                self.read_specification(key.trim(), value.trim())?;
            } else {
                match line.as_str() {
                    "NODE_COORD_SECTION" => coordinates = Some(self.read_coordinates()?),
                    "EDGE_WEIGHT_SECTION" => weights = Some(self.read_weights()?),
                    "DISPLAY_DATA_SECTION" => self.skip_display_data()?,
                    "EOF" => break,
                    _ => return Err(format!("an unknown section: {line}").into()),
                }
            }
        }

        self.create_problem(coordinates, weights)
    }

    fn read_specification(&mut self, key: &str, value: &str) -> Result<(), GenericError> {
        match key {
            "NAME" | "COMMENT" | "NODE_COORD_TYPE" | "DISPLAY_DATA_TYPE" => {}
            "TYPE" => {
                if value != "TSP" {
                    return Err(format!("an unsupported problem type: {value}").into());
                }
            }
            "DIMENSION" => {
                let dimension = value.parse().map_err(|_| format!("cannot parse dimension: {value}"))?;
                self.dimension = Some(dimension);
            }
            "EDGE_WEIGHT_TYPE" => {
                self.weight_type = Some(match value {
                    "EUC_2D" => EdgeWeightType::Euc2d,
                    "CEIL_2D" => EdgeWeightType::Ceil2d,
                    "EXPLICIT" => EdgeWeightType::Explicit,
                    _ => return Err(format!("an unsupported edge weight type: {value}").into()),
                });
            }
            "EDGE_WEIGHT_FORMAT" => {
                self.weight_format = Some(match value {
                    "FULL_MATRIX" => EdgeWeightFormat::FullMatrix,
                    "UPPER_ROW" => EdgeWeightFormat::UpperRow,
                    "UPPER_DIAG_ROW" => EdgeWeightFormat::UpperDiagRow,
                    "LOWER_ROW" => EdgeWeightFormat::LowerRow,
                    "LOWER_DIAG_ROW" => EdgeWeightFormat::LowerDiagRow,
                    _ => return Err(format!("an unsupported edge weight format: {value}").into()),
                });
            }
            _ => return Err(format!("an unknown specification entry: {key}").into()),
        }

        Ok(())
    }

    fn read_coordinates(&mut self) -> Result<Vec<(f64, f64)>, GenericError> {
        let dimension = self.dimension()?;

        (0..dimension)
            .map(|_| {
                read_line(&mut self.reader, &mut self.buffer)?;
                let fields: Vec<&str> = self.buffer.split_whitespace().collect();

                let &[_, x, y] = fields.as_slice() else {
                    return Err(format!("cannot parse node coordinates: {}", self.buffer.trim()).into());
                };

                let x = x.parse().map_err(|_| format!("cannot parse node coordinate: {x}"))?;
                let y = y.parse().map_err(|_| format!("cannot parse node coordinate: {y}"))?;

                Ok((x, y))
            })
            .collect()
    }

    fn read_weights(&mut self) -> Result<Vec<Distance>, GenericError> {
        let dimension = self.dimension()?;
        let format = self
            .weight_format
            .ok_or_else(|| GenericError::from("the edge weight format must precede the edge weight section"))?;

        let expected = match format {
            EdgeWeightFormat::FullMatrix => dimension * dimension,
            EdgeWeightFormat::UpperRow | EdgeWeightFormat::LowerRow => dimension * (dimension - 1) / 2,
            EdgeWeightFormat::UpperDiagRow | EdgeWeightFormat::LowerDiagRow => dimension * (dimension + 1) / 2,
        };

        let mut weights = Vec::with_capacity(expected);
        while weights.len() < expected {
            if read_line(&mut self.reader, &mut self.buffer)? == 0 {
                return Err("an unexpected end of the edge weight section".into());
            }

            for field in self.buffer.split_whitespace() {
                weights.push(field.parse().map_err(|_| format!("cannot parse edge weight: {field}"))?);
            }
        }

        if weights.len() != expected {
            return Err(format!("the edge weight section has {} entries, {expected} expected", weights.len()).into());
        }

        Ok(weights)
    }

    fn skip_display_data(&mut self) -> Result<(), GenericError> {
        for _ in 0..self.dimension()? {
            read_line(&mut self.reader, &mut self.buffer).map_err(|_| "cannot skip display data")?;
        }

        Ok(())
    }

    fn create_problem(
        &self,
        coordinates: Option<Vec<(f64, f64)>>,
        weights: Option<Vec<Distance>>,
    ) -> Result<Problem, GenericError> {
        let dimension = self.dimension()?;
        let weight_type =
            self.weight_type.ok_or_else(|| GenericError::from("the edge weight type is not specified"))?;

        let matrix = match weight_type {
            EdgeWeightType::Euc2d | EdgeWeightType::Ceil2d => {
                let coordinates =
                    coordinates.ok_or_else(|| GenericError::from("the node coord section is missing"))?;
                let round_up = weight_type == EdgeWeightType::Ceil2d;

                coordinates
                    .iter()
                    .flat_map(|&from| coordinates.iter().map(move |&to| euclidean(from, to, round_up)))
                    .collect()
            }
            EdgeWeightType::Explicit => {
                let weights = weights.ok_or_else(|| GenericError::from("the edge weight section is missing"))?;
                let format = self.weight_format.ok_or_else(|| GenericError::from("the edge weight format is not specified"))?;

                expand_weights(dimension, format, &weights)
            }
        };

        Problem::new(dimension, matrix)
    }

    fn dimension(&self) -> Result<Dimension, GenericError> {
        self.dimension.ok_or_else(|| "the dimension must precede any data section".into())
    }
}

/// Returns the euclidean distance rounded to nearest integer, or up for `CEIL_2D` instances.
fn euclidean(from: (f64, f64), to: (f64, f64), round_up: bool) -> Distance {
    let value = ((from.0 - to.0).powi(2) + (from.1 - to.1).powi(2)).sqrt();

    if round_up { value.ceil() as Distance } else { value.round() as Distance }
}

/// Expands a triangle or full listing of edge weights into a full row-major matrix.
fn expand_weights(dimension: Dimension, format: EdgeWeightFormat, weights: &[Distance]) -> Vec<Distance> {
    if format == EdgeWeightFormat::FullMatrix {
        return weights.to_vec();
    }

    let pairs: Vec<(usize, usize)> = match format {
        EdgeWeightFormat::UpperRow => {
            (0..dimension).flat_map(|i| ((i + 1)..dimension).map(move |j| (i, j))).collect()
        }
        EdgeWeightFormat::UpperDiagRow => (0..dimension).flat_map(|i| (i..dimension).map(move |j| (i, j))).collect(),
        EdgeWeightFormat::LowerRow => (0..dimension).flat_map(|i| (0..i).map(move |j| (i, j))).collect(),
        EdgeWeightFormat::LowerDiagRow => (0..dimension).flat_map(|i| (0..=i).map(move |j| (i, j))).collect(),
        EdgeWeightFormat::FullMatrix => unreachable!(),
    };

    let mut matrix = vec![0; dimension * dimension];
    pairs.into_iter().zip(weights.iter().copied()).for_each(|((i, j), weight)| {
        matrix[i * dimension + j] = weight;
        matrix[j * dimension + i] = weight;
    });

    matrix
}

fn read_line<R: Read>(reader: &mut BufReader<R>, buffer: &mut String) -> Result<usize, GenericError> {
    buffer.clear();
    reader.read_line(buffer).map_err(|err| err.to_string().into())
}
