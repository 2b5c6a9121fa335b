/// 단위 문자열과 함께 입력받는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    /// 사이클론 압력, 기준 단위 psi
    Pressure,
    /// 직경/길이, 기준 단위는 호출자가 정한다 (m 또는 mm)
    Length,
    /// 체적 유량, 기준 단위 m³/h
    Flow,
}
