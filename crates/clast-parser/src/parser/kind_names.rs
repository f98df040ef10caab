//! Kind tag constants, one per registered node kind.
//!
//! Compare against `NodeArena::kind_name(idx)`; the registry tables in
//! [`super::kinds`] are keyed by these same strings.

// =============================================================================
// Attributes
// =============================================================================

pub const ALIGNED_ATTR: &str = "AlignedAttr";
pub const ALWAYS_INLINE_ATTR: &str = "AlwaysInlineAttr";
pub const SECTION_ATTR: &str = "SectionAttr";
pub const USED_ATTR: &str = "UsedAttr";
pub const BUILTIN_ATTR: &str = "BuiltinAttr";
pub const NO_THROW_ATTR: &str = "NoThrowAttr";
pub const CONST_ATTR: &str = "ConstAttr";
pub const UNUSED_ATTR: &str = "UnusedAttr";
pub const FORMAT_ATTR: &str = "FormatAttr";
pub const FALL_THROUGH_ATTR: &str = "FallThroughAttr";
pub const NO_BUILTIN_ATTR: &str = "NoBuiltinAttr";
pub const PACKED_ATTR: &str = "PackedAttr";
pub const LOOP_HINT_ATTR: &str = "LoopHintAttr";
pub const WARN_UNUSED_RESULT_ATTR: &str = "WarnUnusedResultAttr";
pub const GNU_INLINE_ATTR: &str = "GNUInlineAttr";
pub const NO_INSTRUMENT_FUNCTION_ATTR: &str = "NoInstrumentFunctionAttr";
pub const ASM_LABEL_ATTR: &str = "AsmLabelAttr";
pub const RESTRICT_ATTR: &str = "RestrictAttr";
pub const ALLOC_SIZE_ATTR: &str = "AllocSizeAttr";
pub const PURE_ATTR: &str = "PureAttr";
pub const NON_NULL_ATTR: &str = "NonNullAttr";
pub const ASSUME_ALIGNED_ATTR: &str = "AssumeAlignedAttr";
pub const TRANSPARENT_UNION_ATTR: &str = "TransparentUnionAttr";
pub const WEAK_ATTR: &str = "WeakAttr";
pub const NO_INLINE_ATTR: &str = "NoInlineAttr";
pub const DEPRECATED_ATTR: &str = "DeprecatedAttr";

// =============================================================================
// Comments
// =============================================================================

pub const FULL_COMMENT: &str = "FullComment";
pub const PARAGRAPH_COMMENT: &str = "ParagraphComment";
pub const TEXT_COMMENT: &str = "TextComment";
pub const INLINE_COMMAND_COMMENT: &str = "InlineCommandComment";
pub const BLOCK_COMMAND_COMMENT: &str = "BlockCommandComment";
pub const VERBATIM_BLOCK_COMMENT: &str = "VerbatimBlockComment";
pub const VERBATIM_BLOCK_LINE_COMMENT: &str = "VerbatimBlockLineComment";
pub const VERBATIM_LINE_COMMENT: &str = "VerbatimLineComment";

// =============================================================================
// Declarations
// =============================================================================

pub const TRANSLATION_UNIT_DECL: &str = "TranslationUnitDecl";
pub const TYPEDEF_DECL: &str = "TypedefDecl";
pub const ENUM_DECL: &str = "EnumDecl";
pub const ENUM_CONSTANT_DECL: &str = "EnumConstantDecl";
pub const RECORD_DECL: &str = "RecordDecl";
pub const FIELD_DECL: &str = "FieldDecl";
pub const FUNCTION_DECL: &str = "FunctionDecl";
pub const VAR_DECL: &str = "VarDecl";
pub const PARM_VAR_DECL: &str = "ParmVarDecl";
pub const EMPTY_DECL: &str = "EmptyDecl";
pub const STATIC_ASSERT_DECL: &str = "StaticAssertDecl";
pub const LABEL_DECL: &str = "LabelDecl";
pub const INDIRECT_FIELD_DECL: &str = "IndirectFieldDecl";

// =============================================================================
// Expressions
// =============================================================================

pub const CONSTANT_EXPR: &str = "ConstantExpr";
pub const DECL_REF_EXPR: &str = "DeclRefExpr";
pub const IMPLICIT_CAST_EXPR: &str = "ImplicitCastExpr";
pub const PAREN_EXPR: &str = "ParenExpr";
pub const C_STYLE_CAST_EXPR: &str = "CStyleCastExpr";
pub const CALL_EXPR: &str = "CallExpr";
pub const MEMBER_EXPR: &str = "MemberExpr";
pub const ARRAY_SUBSCRIPT_EXPR: &str = "ArraySubscriptExpr";
pub const UNARY_EXPR_OR_TYPE_TRAIT_EXPR: &str = "UnaryExprOrTypeTraitExpr";
pub const STMT_EXPR: &str = "StmtExpr";
pub const INIT_LIST_EXPR: &str = "InitListExpr";
pub const IMPLICIT_VALUE_INIT_EXPR: &str = "ImplicitValueInitExpr";
pub const OFFSET_OF_EXPR: &str = "OffsetOfExpr";
pub const COMPOUND_LITERAL_EXPR: &str = "CompoundLiteralExpr";
pub const ADDR_LABEL_EXPR: &str = "AddrLabelExpr";
pub const GENERIC_SELECTION_EXPR: &str = "GenericSelectionExpr";
pub const PREDEFINED_EXPR: &str = "PredefinedExpr";
pub const CHOOSE_EXPR: &str = "ChooseExpr";
pub const TYPE_TRAIT_EXPR: &str = "TypeTraitExpr";
pub const RECOVERY_EXPR: &str = "RecoveryExpr";
pub const OPAQUE_VALUE_EXPR: &str = "OpaqueValueExpr";

// =============================================================================
// Literals
// =============================================================================

pub const INTEGER_LITERAL: &str = "IntegerLiteral";
pub const STRING_LITERAL: &str = "StringLiteral";
pub const CHARACTER_LITERAL: &str = "CharacterLiteral";
pub const FLOATING_LITERAL: &str = "FloatingLiteral";

// =============================================================================
// Operators
// =============================================================================

pub const BINARY_OPERATOR: &str = "BinaryOperator";
pub const UNARY_OPERATOR: &str = "UnaryOperator";
pub const CONDITIONAL_OPERATOR: &str = "ConditionalOperator";
pub const COMPOUND_ASSIGN_OPERATOR: &str = "CompoundAssignOperator";
pub const BINARY_CONDITIONAL_OPERATOR: &str = "BinaryConditionalOperator";

// =============================================================================
// Statements
// =============================================================================

pub const COMPOUND_STMT: &str = "CompoundStmt";
pub const GCC_ASM_STMT: &str = "GCCAsmStmt";
pub const RETURN_STMT: &str = "ReturnStmt";
pub const DECL_STMT: &str = "DeclStmt";
pub const IF_STMT: &str = "IfStmt";
pub const SWITCH_STMT: &str = "SwitchStmt";
pub const CASE_STMT: &str = "CaseStmt";
pub const ATTRIBUTED_STMT: &str = "AttributedStmt";
pub const NULL_STMT: &str = "NullStmt";
pub const BREAK_STMT: &str = "BreakStmt";
pub const GOTO_STMT: &str = "GotoStmt";
pub const DEFAULT_STMT: &str = "DefaultStmt";
pub const DO_STMT: &str = "DoStmt";
pub const FOR_STMT: &str = "ForStmt";
pub const LABEL_STMT: &str = "LabelStmt";
pub const CONTINUE_STMT: &str = "ContinueStmt";
pub const WHILE_STMT: &str = "WhileStmt";

// =============================================================================
// Types
// =============================================================================

pub const BUILTIN_TYPE: &str = "BuiltinType";
pub const RECORD_TYPE: &str = "RecordType";
pub const POINTER_TYPE: &str = "PointerType";
pub const CONSTANT_ARRAY_TYPE: &str = "ConstantArrayType";
pub const TYPEDEF_TYPE: &str = "TypedefType";
pub const ELABORATED_TYPE: &str = "ElaboratedType";
pub const PAREN_TYPE: &str = "ParenType";
pub const FUNCTION_PROTO_TYPE: &str = "FunctionProtoType";
pub const QUAL_TYPE: &str = "QualType";
pub const ENUM_TYPE: &str = "EnumType";
