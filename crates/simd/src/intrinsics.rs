//! Re-exports target architecture-specific intrinsics.
//!
//! These are only provided on supported platforms when the `simd-intrinsics` feature flag is
//! enabled.

crate::cfg_sse2_intrinsics! {

/// Provides [SSE2] SIMD intrinsics available on `x86` and `x86_64` platforms.
///
/// [SSE2]: https://en.wikipedia.org/wiki/SSE2
pub(crate) mod sse2 {
    #[cfg(target_arch = "x86")]
    use core::arch::x86 as intrin;

    #[cfg(target_arch = "x86_64")]
    use core::arch::x86_64 as intrin;

    pub(crate) use intrin::{
        __m128, __m128d, __m128i, _mm_add_epi16, _mm_add_epi32, _mm_add_epi64, _mm_add_epi8,
        _mm_add_pd, _mm_add_ps, _mm_and_pd, _mm_and_ps, _mm_and_si128, _mm_andnot_pd,
        _mm_andnot_ps, _mm_andnot_si128, _mm_castpd_si128, _mm_castps_si128, _mm_castsi128_pd,
        _mm_castsi128_ps, _mm_cmpeq_epi16, _mm_cmpeq_epi32, _mm_cmpeq_epi8, _mm_cmpeq_pd,
        _mm_cmpeq_ps, _mm_cmpge_pd, _mm_cmpge_ps, _mm_cmpgt_epi16, _mm_cmpgt_epi32,
        _mm_cmpgt_epi8, _mm_cmpgt_pd, _mm_cmpgt_ps, _mm_cmple_pd, _mm_cmple_ps, _mm_cmplt_pd,
        _mm_cmplt_ps, _mm_cmpneq_pd, _mm_cmpneq_ps, _mm_cvtepi32_ps, _mm_cvtsi32_si128,
        _mm_div_pd, _mm_div_ps, _mm_load_pd, _mm_load_ps, _mm_load_si128, _mm_loadu_pd,
        _mm_loadu_ps, _mm_loadu_si128, _mm_max_epi16, _mm_max_epu8, _mm_max_pd, _mm_max_ps,
        _mm_min_epi16, _mm_min_epu8, _mm_min_pd, _mm_min_ps, _mm_mul_epu32, _mm_mul_pd,
        _mm_mul_ps, _mm_mullo_epi16, _mm_or_pd, _mm_or_ps, _mm_or_si128, _mm_packs_epi16,
        _mm_packs_epi32, _mm_set1_epi16, _mm_set1_epi32, _mm_set1_epi64x, _mm_set1_epi8,
        _mm_set1_pd, _mm_set1_ps, _mm_setzero_pd, _mm_setzero_ps, _mm_setzero_si128,
        _mm_shuffle_epi32, _mm_shuffle_ps, _mm_sll_epi16, _mm_sll_epi32, _mm_sll_epi64,
        _mm_slli_epi16, _mm_sqrt_pd, _mm_sqrt_ps, _mm_sra_epi16, _mm_sra_epi32, _mm_srl_epi16,
        _mm_srl_epi32, _mm_srl_epi64, _mm_srli_epi16, _mm_srli_si128, _mm_store_pd, _mm_store_ps,
        _mm_store_si128, _mm_storeu_pd, _mm_storeu_ps, _mm_storeu_si128, _mm_sub_epi16,
        _mm_sub_epi32, _mm_sub_epi64, _mm_sub_epi8, _mm_sub_pd, _mm_sub_ps, _mm_unpackhi_epi16,
        _mm_unpackhi_epi8, _mm_unpacklo_epi16, _mm_unpacklo_epi32, _mm_unpacklo_epi8,
        _mm_xor_pd, _mm_xor_ps, _mm_xor_si128,
    };
}

}
