use inkwell::execution_engine::{ExecutionEngine, FunctionLookupError, JitFunction};
use inkwell::module::{Linkage, Module};
use inkwell::types::{BasicMetadataTypeEnum, FunctionType};
use inkwell::OptimizationLevel;
use thiserror::Error;

use crate::builtins::{Builtin, CruxType};

#[derive(Error, Debug)]
pub enum JitError {
    #[error("cannot create execution engine: {0}")]
    Engine(String),

    #[error(transparent)]
    Lookup(#[from] FunctionLookupError),
}

/// A JIT over one module, with the console builtins linked in.
pub struct JitRuntime<'a, 'ctx> {
    module: &'a Module<'ctx>,
    engine: ExecutionEngine<'ctx>,
}

impl<'a, 'ctx> JitRuntime<'a, 'ctx> {
    pub fn new(module: &'a Module<'ctx>) -> Result<Self, JitError> {
        let engine = module
            .create_jit_execution_engine(OptimizationLevel::Default)
            .map_err(|e| JitError::Engine(e.to_string()))?;
        Ok(Self { module, engine })
    }

    pub fn get_main(&self) -> Result<JitFunction<'ctx, unsafe extern "C" fn() -> i64>, JitError> {
        Ok(unsafe { self.engine.get_function("main") }?)
    }

    fn builtin_type(&self, builtin: Builtin) -> FunctionType<'ctx> {
        let context = self.module.get_context();
        // bools travel as i64, same as ints
        let params: Vec<BasicMetadataTypeEnum<'ctx>> = builtin
            .params()
            .iter()
            .map(|_| context.i64_type().into())
            .collect();
        match builtin.returns() {
            CruxType::Void => context.void_type().fn_type(&params, false),
            CruxType::Int | CruxType::Bool => context.i64_type().fn_type(&params, false),
        }
    }

    /// Adds an external declaration for each builtin the module lacks.
    pub fn declare_builtins(&self) {
        for builtin in Builtin::ALL.iter().copied() {
            if self.module.get_function(builtin.symbol()).is_none() {
                tracing::debug!("declaring {}", builtin);
                self.module
                    .add_function(builtin.symbol(), self.builtin_type(builtin), Some(Linkage::External));
            }
        }
    }

    pub fn attach_runtime(&self, runtime: &[(&str, usize)]) {
        self.declare_builtins();
        for (name, addr) in runtime {
            if let Some(func) = self.module.get_function(name) {
                self.engine.add_global_mapping(&func, *addr);
            }
        }
    }
}
