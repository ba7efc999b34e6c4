//! Fixed educational copy shown next to computed values. None of it is advice.

pub const APP_NAME: &str = "FinAware";

pub const CAPTION: &str = "A research-informed decision-awareness tool for students. \
This tool does not recommend actions — it helps you explore trade-offs.";

pub const AWARENESS: &str = "In financial education, simple benchmarks (such as separating \
needs and wants) are often used to encourage reflection. Individual situations may vary.";

pub const BUY_NOW_VS_SAVE: &str = "This comparison highlights a time trade-off. \
Some people prefer immediate access; others prioritize reaching goals sooner.";

pub const WORK_VS_FREE_TIME: &str = "This scenario illustrates opportunity cost — \
gaining income may reduce free time or study time.";

pub const REFLECTION_PROMPT: &str =
    "What did you notice about the trade-offs in your situation?";

pub const REFLECTION_PLACEHOLDER: &str =
    "For example: Which option aligns better with your priorities or goals?";

pub const FOOTER: &str = "FinAware is an educational prototype. \
It supports reflection and awareness rather than financial advice.";

pub const UNDEFINED_SHARES: &str = "n/a (set an income first)";
