//! Task chaining. A [`TaskNode`] is one vertex in a directed acyclic graph
//! of processing steps; edges point downstream, so walking `next` from a
//! source visits everything that consumes its output.

use quadro_columnar::ColumnType;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Declared shape of one output a task produces: a name plus the typed
/// columns the resulting frame will carry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutputSpec {
    pub name: String,
    pub columns: Vec<(String, ColumnType)>,
}

impl OutputSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    pub fn with_column(mut self, name: impl Into<String>, column_type: ColumnType) -> Self {
        self.columns.push((name.into(), column_type));
        self
    }
}

/// One vertex in a task graph.
///
/// Successors are shared [`Arc`] handles, so a node can feed several
/// downstream consumers without cloning them. Build graphs sink-first: a
/// node stays mutable until it is wrapped for sharing, at which point its
/// own successor list is already complete.
#[derive(Clone, Debug)]
pub struct TaskNode {
    name: String,
    next: Vec<Arc<TaskNode>>,
    outputs: Vec<OutputSpec>,
}

impl TaskNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            next: Vec::new(),
            outputs: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Append a downstream task. Append only; duplicates and cycles are the
    /// caller's responsibility.
    pub fn add_next(&mut self, task: Arc<TaskNode>) {
        self.next.push(task);
    }

    /// Declare an output this task produces.
    pub fn add_output(&mut self, spec: OutputSpec) {
        self.outputs.push(spec);
    }

    pub fn next(&self) -> &[Arc<TaskNode>] {
        &self.next
    }

    pub fn outputs(&self) -> &[OutputSpec] {
        &self.outputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn outputs_accumulate_in_declaration_order() {
        let mut task = TaskNode::new("ingest");
        task.add_output(OutputSpec::new("raw").with_column("id", ColumnType::Int));
        task.add_output(
            OutputSpec::new("clean")
                .with_column("id", ColumnType::Int)
                .with_column("label", ColumnType::String),
        );

        assert_eq!(task.outputs().len(), 2);
        assert_eq!(task.outputs()[0].name, "raw");
        assert_eq!(task.outputs()[1].columns.len(), 2);
    }
}
