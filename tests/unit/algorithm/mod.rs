mod feasibility;
mod pool;
