//! rill_flow: control-flow graphs over lowered bodies.
//!
//! A graph is built from a flat, lowered block: statements are partitioned
//! into basic blocks, blocks are connected along gotos and fallthrough,
//! and blocks no goto can reach are pruned. The graph answers the one
//! question the binder needs, whether every path through a body ends in a
//! return, and renders itself as Graphviz dot for debugging.

use rill_bound::{
    BoundBlockStatement, BoundExpression, BoundLabel, BoundStatement, BoundUnaryExpression,
    BoundUnaryOperator,
};
use rill_core::value::Value;
use rill_symbols::TypeSymbol;
use rill_syntax::SyntaxKind;
use rustc_hash::FxHashMap;
use std::fmt;
use std::fmt::Write as _;

/// A maximal run of straight-line statements. Control enters at the first
/// statement and leaves after the last.
#[derive(Debug)]
pub struct BasicBlock {
    pub statements: Vec<BoundStatement>,
    pub incoming: Vec<usize>,
    pub outgoing: Vec<usize>,
}

/// A directed edge between blocks; `condition` is `None` for
/// unconditional edges.
#[derive(Debug)]
pub struct Branch {
    pub from: usize,
    pub to: usize,
    pub condition: Option<BoundExpression>,
}

#[derive(Debug)]
pub struct ControlFlowGraph {
    blocks: Vec<BasicBlock>,
    branches: Vec<Branch>,
    start: usize,
    end: usize,
}

impl ControlFlowGraph {
    pub fn create(body: &BoundBlockStatement) -> ControlFlowGraph {
        GraphBuilder::new(partition(body)).build()
    }

    /// Whether every path through the body ends in a `return`.
    ///
    /// Each edge into the end block must leave a block whose final
    /// statement is a return. An unreachable end block means the body
    /// never falls off the end, which also satisfies the check.
    pub fn all_paths_return(body: &BoundBlockStatement) -> bool {
        let graph = ControlFlowGraph::create(body);
        graph.blocks[graph.end].incoming.iter().all(|&branch| {
            let from = &graph.blocks[graph.branches[branch].from];
            matches!(from.statements.last(), Some(BoundStatement::Return(_)))
        })
    }

    pub fn blocks(&self) -> &[BasicBlock] {
        &self.blocks
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    /// Render the graph as Graphviz dot.
    pub fn write_to(&self, out: &mut impl fmt::Write) -> fmt::Result {
        writeln!(out, "digraph G {{")?;
        for (id, block) in self.blocks.iter().enumerate() {
            let label = if id == self.start {
                "<Start>".to_string()
            } else if id == self.end {
                "<End>".to_string()
            } else {
                let mut text = String::new();
                for statement in &block.statements {
                    let _ = writeln!(text, "{statement}");
                }
                text
            };
            writeln!(out, "    N{id} [label = {}, shape = box]", quote(&label))?;
        }
        for branch in &self.branches {
            let label = match &branch.condition {
                Some(condition) => condition.to_string(),
                None => String::new(),
            };
            writeln!(
                out,
                "    N{} -> N{} [label = {}]",
                branch.from,
                branch.to,
                quote(&label)
            )?;
        }
        writeln!(out, "}}")
    }
}

fn quote(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\l"))
}

/// Split a flat statement list into basic blocks. A label starts a new
/// block; a goto or return ends one.
fn partition(body: &BoundBlockStatement) -> Vec<Vec<BoundStatement>> {
    let mut blocks = Vec::new();
    let mut current: Vec<BoundStatement> = Vec::new();

    for statement in &body.statements {
        match statement {
            BoundStatement::Label(_) => {
                if !current.is_empty() {
                    blocks.push(std::mem::take(&mut current));
                }
                current.push(statement.clone());
            }
            BoundStatement::Goto(_)
            | BoundStatement::ConditionalGoto(_)
            | BoundStatement::Return(_) => {
                current.push(statement.clone());
                blocks.push(std::mem::take(&mut current));
            }
            BoundStatement::VariableDeclaration(_) | BoundStatement::Expression(_) => {
                current.push(statement.clone());
            }
            BoundStatement::Block(_)
            | BoundStatement::If(_)
            | BoundStatement::While(_)
            | BoundStatement::DoWhile(_)
            | BoundStatement::For(_) => {
                unreachable!("graph built over unlowered statement")
            }
        }
    }
    if !current.is_empty() {
        blocks.push(current);
    }
    blocks
}

struct GraphBuilder {
    /// Start at 0, content blocks at 1..=n, end at n + 1.
    blocks: Vec<Vec<BoundStatement>>,
    branches: Vec<Branch>,
}

impl GraphBuilder {
    fn new(content: Vec<Vec<BoundStatement>>) -> Self {
        Self {
            blocks: content,
            branches: Vec::new(),
        }
    }

    fn build(mut self) -> ControlFlowGraph {
        let start = 0usize;
        let end = self.blocks.len() + 1;

        let mut label_targets: FxHashMap<BoundLabel, usize> = FxHashMap::default();
        for (index, block) in self.blocks.iter().enumerate() {
            if let Some(BoundStatement::Label(label_statement)) = block.first() {
                label_targets.insert(label_statement.label, index + 1);
            }
        }

        let first = if self.blocks.is_empty() { end } else { 1 };
        self.connect(start, first, None);

        for index in 0..self.blocks.len() {
            let id = index + 1;
            let next = if index + 1 < self.blocks.len() { id + 1 } else { end };
            let last = self.blocks[index].last().cloned();
            match last {
                Some(BoundStatement::Goto(goto)) => {
                    let to = label_targets[&goto.label];
                    self.connect(id, to, None);
                }
                Some(BoundStatement::ConditionalGoto(goto)) => {
                    let to = label_targets[&goto.label];
                    let (taken, fallthrough) = if goto.jump_if_true {
                        (goto.condition.clone(), negate(&goto.condition))
                    } else {
                        (negate(&goto.condition), goto.condition.clone())
                    };
                    self.connect(id, to, Some(taken));
                    self.connect(id, next, Some(fallthrough));
                }
                Some(BoundStatement::Return(_)) => {
                    self.connect(id, end, None);
                }
                _ => {
                    self.connect(id, next, None);
                }
            }
        }

        let alive = self.prune(end);
        self.finish(end, alive)
    }

    /// Add an edge. A constant-true condition becomes unconditional; a
    /// constant-false condition produces no edge at all.
    fn connect(&mut self, from: usize, to: usize, condition: Option<BoundExpression>) {
        let condition = match condition {
            Some(c) => match c.constant_value() {
                Some(Value::Bool(true)) => None,
                Some(Value::Bool(false)) => return,
                _ => Some(c),
            },
            None => None,
        };
        self.branches.push(Branch {
            from,
            to,
            condition,
        });
    }

    /// Repeatedly remove content blocks no branch leads to, along with
    /// their outgoing branches, until the graph stops shrinking.
    fn prune(&mut self, end: usize) -> Vec<bool> {
        let mut alive = vec![true; end + 1];
        loop {
            let mut removed = false;
            for id in 1..end {
                if !alive[id] {
                    continue;
                }
                let has_incoming = self.branches.iter().any(|b| b.to == id);
                if !has_incoming {
                    alive[id] = false;
                    self.branches.retain(|b| b.from != id && b.to != id);
                    removed = true;
                }
            }
            if !removed {
                break;
            }
        }
        alive
    }

    fn finish(self, end: usize, alive: Vec<bool>) -> ControlFlowGraph {
        // Remap surviving ids to a dense range.
        let mut remap: FxHashMap<usize, usize> = FxHashMap::default();
        let mut blocks = Vec::new();

        remap.insert(0, 0);
        blocks.push(BasicBlock {
            statements: Vec::new(),
            incoming: Vec::new(),
            outgoing: Vec::new(),
        });
        for (index, statements) in self.blocks.into_iter().enumerate() {
            let id = index + 1;
            if !alive[id] {
                continue;
            }
            remap.insert(id, blocks.len());
            blocks.push(BasicBlock {
                statements,
                incoming: Vec::new(),
                outgoing: Vec::new(),
            });
        }
        remap.insert(end, blocks.len());
        blocks.push(BasicBlock {
            statements: Vec::new(),
            incoming: Vec::new(),
            outgoing: Vec::new(),
        });

        let mut branches = Vec::new();
        for branch in self.branches {
            let from = remap[&branch.from];
            let to = remap[&branch.to];
            let index = branches.len();
            blocks[from].outgoing.push(index);
            blocks[to].incoming.push(index);
            branches.push(Branch {
                from,
                to,
                condition: branch.condition,
            });
        }

        let end = blocks.len() - 1;
        ControlFlowGraph {
            blocks,
            branches,
            start: 0,
            end,
        }
    }
}

fn negate(condition: &BoundExpression) -> BoundExpression {
    if let Some(Value::Bool(value)) = condition.constant_value() {
        return BoundExpression::literal(Value::Bool(!value));
    }
    match BoundUnaryOperator::bind(SyntaxKind::BangToken, TypeSymbol::Bool) {
        Some(operator) => BoundExpression::Unary(BoundUnaryExpression {
            operator,
            operand: Box::new(condition.clone()),
        }),
        None => unreachable!("logical negation is in the operator table"),
    }
}
